//! # Intermediate Representation (IR)
//!
//! The operation stream that sits between the markup walker and a device.
//!
//! ```text
//! ┌──────────┐     ┌─────────────┐     ┌──────────────────────┐
//! │  Markup  │ ──► │     IR      │ ──► │ Device               │
//! │  (tree)  │     │  (Vec<Op>)  │     │ (Program/StarDevice) │
//! └──────────┘     └─────────────┘     └──────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use printml::ir::{Op, Program};
//! use printml::protocol::text::Alignment;
//!
//! let mut program = Program::new();
//! program.push(Op::Online);
//! program.push(Op::Justify(Alignment::Center));
//! program.push(Op::Write("HELLO".into()));
//! program.push(Op::Offline);
//!
//! println!("{:#?}", program);
//! ```

mod codegen;
mod ops;

// codegen adds methods to Op and Program via impl
pub use ops::*;
