//! # Printer Module
//!
//! - [`config`]: Serial device settings and printing constants

pub mod config;

pub use config::PrinterConfig;
