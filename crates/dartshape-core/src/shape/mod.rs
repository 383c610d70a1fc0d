//! Structural shape analysis for Dart class members
//!
//! This module provides the per-declaration analysis used by folding and
//! outline providers:
//! - Shape scanning (`sequence` fingerprint + `leading_text` label)
//! - Member classification (field, getter, method, operator, ...)
//!
//! Locating member boundaries inside a full source file is left to the caller.

pub mod classify;
pub mod literal;
pub mod scanner;

pub use classify::{classify, classify_in, MemberKind, MemberSignature};
pub use scanner::{scan, ScanResult, ShapeScanner};
