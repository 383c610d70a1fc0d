//! dartshape CLI - Command-line interface library
//!
//! This library provides the CLI functionality for dartshape, including:
//! - Scan: Print the shape sequence and leading text of a declaration
//! - Classify: Print the member kind, name and label of a declaration
//! - Batch: Classify a file of declarations, one per line
//!
//! # Library Usage
//!
//! ```ignore
//! use dartshape_cli::{run_cli, scan_command, OutputFormat};
//!
//! // Run the full CLI
//! run_cli()?;
//!
//! // Or use individual commands programmatically
//! let report = scan_command("bool isValid() {}", OutputFormat::Json, &settings)?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Fingerprint one declaration
//! dartshape scan "static const a = 1;"
//!
//! # Classify a constructor
//! dartshape classify --class Point "Point.origin() : x = 0, y = 0;"
//!
//! # Classify every line of a file as JSON
//! dartshape batch members.txt --format json
//! ```

pub mod app;

// Re-export main entry point and types
pub use app::{
    batch_command, classify_command, load_settings, read_declaration, run_cli, scan_command,
    OutputFormat,
};
