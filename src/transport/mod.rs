//! # Printer Transport Layer
//!
//! Communication backends for sending encoded bytes to printers.
//!
//! - [`serial`]: Raw serial TTY (UART, USB-serial, Bluetooth RFCOMM)
//!
//! Any `std::io::Write` can stand in for a transport, which is how tests
//! and `printml print --output` capture bytes.

pub mod serial;

pub use serial::SerialTransport;
