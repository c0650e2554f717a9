use crate::types::ComparisonResult;

/// CodeComparator is a strategy trait for comparing code.
/// Both inputs are already normalized.
pub trait CodeComparator: Send + Sync {
    /// - `student`: normalized submission.
    /// - `solution`: normalized reference solution.
    fn compare(&self, student: &str, solution: &str) -> ComparisonResult;
}
