//! Configuration
//!
//! Settings are loaded from `dartshape.toml`:
//!
//! ```toml
//! [scanner]
//! strip_type_arguments = true
//!
//! [output]
//! format = "json"
//! ```
//!
//! Every section is optional; missing fields fall back to defaults.

mod settings;

#[cfg(test)]
mod tests;

pub use settings::{OutputSettings, ReportFormat, ScannerSettings, Settings, CONFIG_FILE_NAME};
