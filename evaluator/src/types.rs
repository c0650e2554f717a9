//! # Types Module
//!
//! Core data structures shared by every stage of the evaluation pipeline.
//! All of them live for a single evaluation call.

use serde::{Deserialize, Serialize};

/// Category of a problem found by a syntax validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyntaxErrorKind {
    /// Structural problem: missing `;`, unbalanced block, malformed header.
    Sintaxis,
    /// Use of a variable that was never declared.
    Variable,
}

/// A problem found by a syntax validator.
///
/// `line` is 1-based; `0` means the problem concerns the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxError {
    pub line: usize,
    pub message: String,
    pub kind: SyntaxErrorKind,
}

impl SyntaxError {
    pub fn sintaxis(line: usize, message: impl Into<String>) -> Self {
        Self { line, message: message.into(), kind: SyntaxErrorKind::Sintaxis }
    }

    pub fn variable(line: usize, message: impl Into<String>) -> Self {
        Self { line, message: message.into(), kind: SyntaxErrorKind::Variable }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedLine {
    pub line: usize,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    pub line: usize,
    pub expected: String,
    pub actual: String,
}

/// Positional comparison of a submission against the reference solution.
///
/// `matched_lines.len() + diff_lines.len()` always equals the line count of
/// the longer of the two inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Percentage in `0.0..=100.0`.
    pub similarity: f64,
    pub matched_lines: Vec<MatchedLine>,
    pub diff_lines: Vec<DiffLine>,
}

impl ComparisonResult {
    pub fn line_count(&self) -> usize {
        self.matched_lines.len() + self.diff_lines.len()
    }
}

/// What aspect of the program a rubric criterion looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionKind {
    Declaracion,
    Asignacion,
    Condicional,
    Bucle,
    Estructura,
    Logica,
    /// Author-supplied rule of a fixed rubric.
    Regla,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricCriterion {
    pub label: String,
    pub points: u32,
    pub kind: CriterionKind,
    /// Message shown when the criterion is not met, if the rubric provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl RubricCriterion {
    pub fn new(label: impl Into<String>, points: u32, kind: CriterionKind) -> Self {
        Self { label: label.into(), points, kind, hint: None }
    }
}

/// Outcome of checking one criterion. `points_awarded` is either `0` or
/// `criterion.points`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricEvaluation {
    pub criterion: RubricCriterion,
    pub points_awarded: u32,
    pub satisfied: bool,
}

impl RubricEvaluation {
    pub fn new(criterion: RubricCriterion, satisfied: bool) -> Self {
        let points_awarded = if satisfied { criterion.points } else { 0 };
        Self { criterion, points_awarded, satisfied }
    }
}

/// Error class reported to the caller as `tipo_errores`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Sintaxis,
    Logica,
}
