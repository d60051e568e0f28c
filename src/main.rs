//! # printml CLI
//!
//! Command-line interface for printing XML markup on a receipt printer.
//!
//! ## Usage
//!
//! ```bash
//! # Serve POST /xml on port 5000
//! printml serve --device /dev/ttyAMA0
//!
//! # Print a document directly
//! printml print receipt.xml
//!
//! # Capture the printer bytes instead of printing
//! printml print receipt.xml --output receipt.bin
//!
//! # Show the op stream a document compiles to
//! printml ops receipt.xml --json
//!
//! # List the supported tags
//! printml tags
//! ```

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use printml::{
    Error,
    device::{self, StarDevice},
    ir::Program,
    markup::{self, Tag},
    printer::{PrinterConfig, config::{DEFAULT_BAUD_RATE, DEFAULT_DEVICE}},
    server::{self, DEFAULT_MAX_BODY_BYTES, ServerConfig},
    transport::SerialTransport,
};

/// printml - XML markup for thermal receipt printers
#[derive(Parser, Debug)]
#[command(name = "printml")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:5000")]
        listen: String,

        /// Printer device path
        #[arg(long, default_value = DEFAULT_DEVICE)]
        device: String,

        /// Serial baud rate
        #[arg(long, default_value_t = DEFAULT_BAUD_RATE)]
        baud: u32,

        /// Largest accepted document in bytes
        #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES)]
        max_body: usize,
    },

    /// Print a markup document ("-" reads stdin)
    Print {
        file: PathBuf,

        /// Printer device path
        #[arg(long, default_value = DEFAULT_DEVICE)]
        device: String,

        /// Serial baud rate
        #[arg(long, default_value_t = DEFAULT_BAUD_RATE)]
        baud: u32,

        /// Write printer bytes to this file instead of the device
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show the ops a markup document compiles to
    Ops {
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported tags
    Tags,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            listen,
            device,
            baud,
            max_body,
        } => {
            let config = ServerConfig {
                listen_addr: listen,
                printer: PrinterConfig::default()
                    .with_device(device)
                    .with_baud_rate(baud),
                max_body_bytes: max_body,
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))?;
        }

        Commands::Print {
            file,
            device,
            baud,
            output,
        } => {
            let program = compile_file(&file)?;

            match output {
                Some(path) => {
                    let mut star = StarDevice::new(File::create(&path)?);
                    device::replay(program, &mut star)?;
                    println!("Wrote printer bytes to {}", path.display());
                }
                None => {
                    let printer = PrinterConfig::default()
                        .with_device(device)
                        .with_baud_rate(baud);
                    let mut star = StarDevice::new(SerialTransport::open_with(&printer)?);
                    device::replay(program, &mut star)?;
                    println!("Printed successfully!");
                }
            }
        }

        Commands::Ops { file, json } => {
            let program = compile_file(&file)?;
            if json {
                let out = serde_json::to_string_pretty(&program)
                    .map_err(|e| Error::Config(format!("JSON encoding failed: {}", e)))?;
                println!("{}", out);
            } else {
                for op in &program {
                    println!("{:?}", op);
                }
            }
        }

        Commands::Tags => {
            for tag in Tag::ALL {
                let attribute = tag
                    .attribute()
                    .map(|a| format!("{}=N", a))
                    .unwrap_or_default();
                println!("  {:<15} {:<13} {}", tag.name(), attribute, tag.summary());
            }
        }
    }

    Ok(())
}

/// Read and compile a markup file. Nothing is sent anywhere on failure.
fn compile_file(path: &Path) -> Result<Program, Error> {
    let mut source = Vec::new();
    if path == Path::new("-") {
        io::stdin().read_to_end(&mut source)?;
    } else {
        File::open(path)?.read_to_end(&mut source)?;
    }

    markup::compile_bytes(&source)
}
