//! # Markup Interpreter
//!
//! Turns an XML printout description into device ops.
//!
//! ```text
//! bytes ─► parse ─► Node tree ─► Interpreter ─► Op stream ─► Device
//!                                   │
//!                        Tag registry + text filter
//! ```
//!
//! ## Example
//!
//! ```
//! use printml::ir::Op;
//! use printml::markup;
//! use printml::protocol::text::Alignment;
//!
//! let program = markup::compile(
//!     "<printout><center><bold>HELLO</bold></center></printout>",
//! )?;
//!
//! assert_eq!(
//!     program.ops,
//!     vec![
//!         Op::Online,
//!         Op::Justify(Alignment::Center),
//!         Op::SetBold(true),
//!         Op::Write("HELLO".into()),
//!         Op::SetBold(false),
//!         Op::Justify(Alignment::Left),
//!         Op::Feed(4),
//!         Op::Offline,
//!     ]
//! );
//! # Ok::<(), printml::Error>(())
//! ```

pub mod attrs;
mod node;
mod parse;
mod registry;
pub mod text;
mod walker;

pub use node::{Element, Node};
pub use parse::{MAX_DEPTH, parse, parse_bytes};
pub use registry::Tag;
pub use walker::{CancelToken, Interpreter};

use crate::device::Device;
use crate::error::Result;
use crate::ir::Program;

/// Run one interpretation pass of `root` into `device`.
pub fn interpret<D: Device + ?Sized>(root: &Node, device: &mut D) -> Result<usize> {
    Interpreter::new().run(root, device)
}

/// Parse and interpret a document into a recorded [`Program`].
///
/// Nothing reaches hardware, so this is also the validation step: if it
/// succeeds, replaying the program can only fail at the device.
pub fn compile(source: &str) -> Result<Program> {
    record(&parse(source)?)
}

/// [`compile`] for raw bytes, which must be UTF-8.
pub fn compile_bytes(source: &[u8]) -> Result<Program> {
    record(&parse_bytes(source)?)
}

fn record(root: &Node) -> Result<Program> {
    let mut program = Program::new();
    interpret(root, &mut program)?;
    Ok(program)
}
