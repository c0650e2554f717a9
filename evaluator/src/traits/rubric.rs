//! Rubric Trait
//!
//! Both rubric flavours share this interface:
//!
//! - [`crate::rubric::generated_rubric::GeneratedRubric`], derived from a
//!   reference solution and used for practice exercises.
//! - [`crate::rubric::fixed_rubric::FixedRubric`], built from an author's
//!   labelled regex rules and used for formal evaluations.
//!
//! Which one applies is decided by the caller, never by the rubric itself.

use crate::types::{ComparisonResult, RubricCriterion, RubricEvaluation};

/// Everything a rubric may look at when scoring one submission.
#[derive(Debug, Clone, Copy)]
pub struct RubricInput<'a> {
    /// The submission after normalization.
    pub normalized_code: &'a str,
    /// Present on the free-form path only.
    pub comparison: Option<&'a ComparisonResult>,
}

pub trait Rubric: Send + Sync {
    /// Criteria in reporting order.
    fn criteria(&self) -> &[RubricCriterion];

    /// One evaluation per criterion, in the same order as [`Rubric::criteria`].
    fn evaluate(&self, input: &RubricInput<'_>) -> Vec<RubricEvaluation>;

    fn total_points(&self) -> u32 {
        self.criteria().iter().map(|c| c.points).sum()
    }
}
