//! Evaluator Error Types
//!
//! [`EvaluatorError`] covers the faults that are *not* a student's mistake:
//! broken rubric configuration supplied by an exercise author. A wrong or
//! non-compiling submission is never an error; it is reported through
//! [`crate::report::EvaluationOutcome`].
//!
//! # Example
//!
//! ```rust
//! use evaluator::error::EvaluatorError;
//!
//! fn check_points(label: &str, points: u32) -> Result<(), EvaluatorError> {
//!     if points == 0 {
//!         return Err(EvaluatorError::InvalidRubric(format!("rule '{label}' awards no points")));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvaluatorError {
    /// An author-supplied rule pattern is not a valid regular expression.
    #[error("invalid pattern for rubric rule '{label}': {message}")]
    InvalidPattern { label: String, message: String },
    /// A fixed rubric was supplied without any rules.
    #[error("rubric has no rules")]
    EmptyRubric,
    /// A rule is structurally unusable (e.g. worth zero points).
    #[error("invalid rubric: {0}")]
    InvalidRubric(String),
}
