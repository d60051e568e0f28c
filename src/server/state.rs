//! Server state and configuration.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::printer::PrinterConfig;

/// Largest markup document accepted by `POST /xml`.
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:5000")
    pub listen_addr: String,
    /// Printer the documents are sent to
    pub printer: PrinterConfig,
    /// Request body limit in bytes
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".to_string(),
            printer: PrinterConfig::default(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    /// Held until the device write returns: one document at a time per printer.
    pub print_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            print_lock: Arc::new(Mutex::new(())),
        }
    }
}
