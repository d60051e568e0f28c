//! # printml - XML Markup for Thermal Receipt Printers
//!
//! printml interprets a small XML vocabulary describing formatted text and
//! drives a receipt printer with it. It provides:
//!
//! - **Markup interpreter**: tag registry, tree walker and text filter
//! - **IR**: the ordered op stream a document compiles to
//! - **Device layer**: recording device and StarPRNT encoder
//! - **Transport**: raw serial TTY output
//! - **HTTP server**: `POST /xml` to print a document
//!
//! ## Quick Start
//!
//! ```no_run
//! use printml::{
//!     device::StarDevice,
//!     markup,
//!     printer::PrinterConfig,
//!     transport::SerialTransport,
//! };
//!
//! let root = markup::parse(
//!     "<printout><center><large>HELLO</large></center></printout>",
//! )?;
//!
//! let transport = SerialTransport::open_with(&PrinterConfig::default())?;
//! let mut printer = StarDevice::new(transport);
//! markup::interpret(&root, &mut printer)?;
//!
//! # Ok::<(), printml::Error>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`markup`] | Parser adapter, tag registry and tree walker |
//! | [`ir`] | Op definitions and StarPRNT code generation |
//! | [`device`] | Device contract and implementations |
//! | [`protocol`] | StarPRNT command builders |
//! | [`transport`] | Serial communication |
//! | [`printer`] | Printer configuration |
//! | [`server`] | HTTP front end |
//! | [`error`] | Error types |

pub mod device;
pub mod error;
pub mod ir;
pub mod markup;
pub mod printer;
pub mod protocol;
pub mod server;
pub mod transport;

// Re-exports for convenience
pub use error::{Error, Result};
pub use printer::PrinterConfig;
pub use transport::SerialTransport;
