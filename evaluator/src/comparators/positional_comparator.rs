//! A comparator that aligns submission and solution line by line, where **line order matters**.
//!
//! Entry `i` of the submission is only ever compared with entry `i` of the
//! solution; a missing entry on either side counts as an empty line. There is
//! no edit-distance alignment, so reordered but equivalent code scores low.
//!
//! Normalization collapses newlines, so in practice both sides are a single
//! line and the comparison is a whole-text equality check.

use crate::traits::comparator::CodeComparator;
use crate::types::{ComparisonResult, DiffLine, MatchedLine};

pub struct PositionalComparator;

impl CodeComparator for PositionalComparator {
    fn compare(&self, student: &str, solution: &str) -> ComparisonResult {
        let student_lines: Vec<&str> = student.lines().collect();
        let solution_lines: Vec<&str> = solution.lines().collect();
        let total = student_lines.len().max(solution_lines.len());

        let mut matched_lines = Vec::new();
        let mut diff_lines = Vec::new();

        for i in 0..total {
            let actual = student_lines.get(i).copied().unwrap_or("");
            let expected = solution_lines.get(i).copied().unwrap_or("");
            if actual == expected {
                matched_lines.push(MatchedLine {
                    line: i + 1,
                    content: actual.to_string(),
                });
            } else {
                diff_lines.push(DiffLine {
                    line: i + 1,
                    expected: expected.to_string(),
                    actual: actual.to_string(),
                });
            }
        }

        let similarity = if total == 0 {
            0.0
        } else {
            100.0 * matched_lines.len() as f64 / total as f64
        };

        tracing::debug!(similarity, total, "compared submission against solution");

        ComparisonResult {
            similarity,
            matched_lines,
            diff_lines,
        }
    }
}
