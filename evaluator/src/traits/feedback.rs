//!
//! # Feedback Trait
//!
//! This module defines the [`Feedback`] trait, used to implement pluggable
//! feedback strategies. A strategy turns the comparison and the rubric
//! evaluation into ordered, human-readable messages, and offers remediation
//! recommendations for both logic and syntax failures.
//!

use crate::types::{ComparisonResult, RubricEvaluation, SyntaxError};

pub trait Feedback: Send + Sync {
    /// Ordered feedback for a submission that passed syntax validation.
    fn assemble_feedback(
        &self,
        comparison: &ComparisonResult,
        evaluations: &[RubricEvaluation],
    ) -> Vec<String>;

    /// Remediation advice for a given similarity percentage.
    fn recommendations(&self, similarity: f64) -> Vec<String>;

    /// One message per syntax error.
    fn syntax_feedback(&self, errors: &[SyntaxError]) -> Vec<String>;

    /// Remediation advice after a syntax failure.
    fn syntax_recommendations(&self) -> Vec<String>;
}
