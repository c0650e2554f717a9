//! # Scorer Module
//!
//! Scoring policy of the free-form path. The final score blends similarity
//! and rubric percentage; success depends on similarity alone.

use crate::types::RubricEvaluation;

/// Minimum similarity (percent) for a submission to count as successful.
pub const SUCCESS_THRESHOLD: f64 = 70.0;
/// Weight of the similarity percentage in the final score.
pub const SIMILARITY_WEIGHT: f64 = 0.6;
/// Weight of the rubric percentage in the final score.
pub const RUBRIC_WEIGHT: f64 = 0.4;

/// Percentage of rubric points awarded.
///
/// Returns `0.0` when there are no criteria or they are worth nothing.
///
/// # Example
///
/// ```
/// use evaluator::scorer::compute_rubric_score;
/// use evaluator::types::{CriterionKind, RubricCriterion, RubricEvaluation};
///
/// let evals = vec![
///     RubricEvaluation::new(RubricCriterion::new("a", 20, CriterionKind::Declaracion), true),
///     RubricEvaluation::new(RubricCriterion::new("b", 30, CriterionKind::Bucle), false),
/// ];
/// assert_eq!(compute_rubric_score(&evals), 40.0);
/// assert_eq!(compute_rubric_score(&[]), 0.0);
/// ```
pub fn compute_rubric_score(evaluations: &[RubricEvaluation]) -> f64 {
    let total: u32 = evaluations.iter().map(|e| e.criterion.points).sum();
    if total == 0 {
        return 0.0;
    }
    let awarded: u32 = evaluations.iter().map(|e| e.points_awarded).sum();
    100.0 * awarded as f64 / total as f64
}

/// `round(similarity × 0.6 + rubric_score × 0.4)`, clamped to `0..=100`.
pub fn compute_final_score(similarity: f64, rubric_score: f64) -> u32 {
    let blended = similarity * SIMILARITY_WEIGHT + rubric_score * RUBRIC_WEIGHT;
    blended.round().clamp(0.0, 100.0) as u32
}

pub fn is_success(similarity: f64) -> bool {
    similarity >= SUCCESS_THRESHOLD
}
