//! # StarPRNT Protocol
//!
//! Low-level command builders for Star Micronics thermal receipt printers,
//! limited to what the markup language can express.
//!
//! - [`commands`]: Initialization, code page, paper feed and line spacing
//! - [`text`]: Alignment and text effects
//! - [`cp437`]: Text encoding
//!
//! ```
//! use printml::protocol::{commands, text};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::align(text::Alignment::Center));
//! data.extend(text::bold_on());
//! data.extend(b"RECEIPT");
//! data.extend(text::bold_off());
//! data.extend(commands::feed_lines(4));
//! ```
//!
//! Based on "StarPRNT Command Specifications Rev. 4.10"
//! by Star Micronics Co., Ltd.

pub mod commands;
pub mod cp437;
pub mod text;
