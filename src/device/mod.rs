//! # Device Interface
//!
//! The contract between the markup walker and whatever executes its ops.
//!
//! A device receives ops strictly in stream order and keeps all formatting
//! and session state itself. Handing it to the walker as `&mut` gives one
//! interpretation pass exclusive use of the device.
//!
//! ## Implementations
//!
//! - [`Program`](crate::ir::Program): records the stream (tests, dry runs)
//! - [`StarDevice`]: encodes to StarPRNT and writes to any `std::io::Write`

mod star;

pub use star::StarDevice;

use crate::error::Result;
use crate::ir::{Op, Program};

/// Sink for ordered device operations.
pub trait Device {
    /// Execute one op. An error aborts the interpretation pass.
    fn apply(&mut self, op: Op) -> Result<()>;

    /// Called once after the last op of a pass.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<D: Device + ?Sized> Device for &mut D {
    fn apply(&mut self, op: Op) -> Result<()> {
        (**self).apply(op)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

impl Device for Program {
    fn apply(&mut self, op: Op) -> Result<()> {
        self.push(op);
        Ok(())
    }
}

/// Replay a recorded program into a device, then finish it.
pub fn replay<D: Device + ?Sized>(program: Program, device: &mut D) -> Result<()> {
    for op in program {
        device.apply(op)?;
    }
    device.finish()
}
