//! dartshape-core - structural fingerprints for Dart class members
//!
//! Given the source text of a single class member (field, getter, setter,
//! method, operator or constructor), this crate produces:
//! - a shape `sequence` of depth-zero structural tokens (`(){}`, `=>;`, `=();`)
//! - the `leading_text` before the first boundary (`static const a`)
//! - a [`MemberSignature`] classifying the member for outline and fold views
//!
//! # Example
//!
//! ```
//! use dartshape_core::{classify, scan, MemberKind};
//!
//! let shape = scan("String toString() => '';");
//! assert_eq!(shape.sequence, "()=>;");
//! assert_eq!(shape.leading_text, "String toString");
//!
//! let member = classify("bool get isReachable;");
//! assert_eq!(member.kind, MemberKind::Getter);
//! ```

pub mod config;
pub mod error;
pub mod shape;

pub use config::{ReportFormat, ScannerSettings, Settings};
pub use error::{Result, ShapeError};
pub use shape::{classify, classify_in, scan, MemberKind, MemberSignature, ScanResult, ShapeScanner};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
