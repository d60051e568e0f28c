//! # IR Opcodes
//!
//! The operations a markup document compiles to. Each opcode is a single
//! instruction for the output device; the device keeps the formatting state,
//! so the order of a stream is significant and must be preserved.
//!
//! ```text
//! Markup → Walker → Vec<Op> → Device (StarPRNT bytes, or recorded)
//! ```

use serde::Serialize;

use crate::protocol::text::Alignment;

/// Character size preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Size {
    /// Double height and double width
    Large,
    /// Double height
    Medium,
    /// Normal size
    #[default]
    Small,
}

impl Size {
    /// Height and width multipliers for `ESC i` (0 = 1x, 1 = 2x).
    pub fn multipliers(self) -> (u8, u8) {
        match self {
            Size::Large => (1, 1),
            Size::Medium => (1, 0),
            Size::Small => (0, 0),
        }
    }
}

/// Underline state. `thickness: None` leaves the dot count to the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Underline {
    #[default]
    Off,
    On { thickness: Option<u8> },
}

/// IR opcodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Op {
    // ========== Session ==========
    /// Bring the device online and reset it to a known state.
    Online,

    /// Take the device offline; it ignores everything until the next `Online`.
    Offline,

    // ========== Paper ==========
    /// Feed whole lines.
    Feed(u8),

    /// Feed dot rows.
    FeedRows(u8),

    // ========== Style Changes ==========
    Justify(Alignment),
    SetBold(bool),
    SetInverse(bool),
    SetUpsideDown(bool),
    SetStrike(bool),
    SetUnderline(Underline),
    SetDoubleHeight(bool),
    SetDoubleWidth(bool),

    /// Set line spacing in dot rows; `None` restores the device default.
    SetLineHeight(Option<u8>),

    SetSize(Size),

    // ========== Content ==========
    /// Text exactly as authored, whitespace included.
    Write(String),
}

/// A recorded op stream.
///
/// `Program` is itself a [`Device`](crate::device::Device): interpreting a
/// document into a `Program` captures the stream without touching hardware.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Program {
    pub ops: Vec<Op>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Add an op to the program.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Get the number of ops in the program.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the program is empty.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl FromIterator<Op> for Program {
    fn from_iter<T: IntoIterator<Item = Op>>(iter: T) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Program {
    type Item = Op;
    type IntoIter = std::vec::IntoIter<Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
