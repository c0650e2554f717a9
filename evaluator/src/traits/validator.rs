//! Syntax Validator Trait
//!
//! A validator scans raw source in one language and reports structural
//! problems. Validators never fail: an empty list means no problems were
//! found, and callers treat a non-empty list as blocking.

use crate::types::SyntaxError;
use util::languages::Language;

pub trait SyntaxValidator: Send + Sync {
    /// The language this validator understands.
    fn language(&self) -> Language;

    /// Returns every problem found, in the order it was found.
    fn validate(&self, code: &str) -> Vec<SyntaxError>;
}
