//! # Evaluation Report Module
//!
//! Serializable results returned to the caller of the evaluator.
//!
//! - [`EvaluationOutcome`]: result of the free-form path (practice exercises).
//! - [`FixedRubricReport`]: result of the fixed-rubric path (formal evaluations).
//!
//! ## JSON Output Example
//!
//! ```json
//! {
//!   "success": true,
//!   "feedback": ["🎉 ¡Excelente! ...", "✅ Aspectos correctos:", "..."],
//!   "score": 100,
//!   "rubric": [ { "criterion": { "label": "...", "points": 20, "kind": "declaracion" }, "points_awarded": 20, "satisfied": true } ],
//!   "language": "c",
//!   "tipo_errores": "logica",
//!   "similaridad": 100.0,
//!   "detalles": { "errores": [], "comparacion": { ... }, "puntaje_rubrica": 100.0 },
//!   "recomendaciones": [],
//!   "resumen": "Puntuación: 100/100 · Similitud: 100.0% · Aprobado"
//! }
//! ```
//!
//! The field names are part of the contract with the web front end.

use crate::types::{ComparisonResult, ErrorKind, RubricEvaluation, SyntaxError};
use serde::{Deserialize, Serialize};
use util::languages::Language;

/// Supporting data behind an [`EvaluationOutcome`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationDetails {
    #[serde(rename = "errores")]
    pub syntax_errors: Vec<SyntaxError>,
    #[serde(rename = "comparacion")]
    pub comparison: Option<ComparisonResult>,
    /// Percentage of rubric points awarded, `0.0..=100.0`.
    #[serde(rename = "puntaje_rubrica")]
    pub rubric_score: f64,
}

/// Terminal result of the free-form evaluation path.
///
/// `success` and `score` are computed independently and may disagree: a
/// submission can score well and still not pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub success: bool,
    pub feedback: Vec<String>,
    /// `0..=100`
    pub score: u32,
    pub rubric: Vec<RubricEvaluation>,
    pub language: Language,
    #[serde(rename = "tipo_errores")]
    pub error_kind: ErrorKind,
    #[serde(rename = "similaridad", skip_serializing_if = "Option::is_none", default)]
    pub similarity: Option<f64>,
    #[serde(rename = "detalles")]
    pub details: EvaluationDetails,
    #[serde(rename = "recomendaciones")]
    pub recommendations: Vec<String>,
    #[serde(rename = "resumen")]
    pub summary: String,
}

/// Per-rule line of a [`FixedRubricReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricDetail {
    pub label: String,
    pub correct: bool,
    pub points_awarded: u32,
    pub points_total: u32,
    /// `"Correcto"` when the rule matched, otherwise the author's hint.
    pub feedback: String,
}

impl From<&RubricEvaluation> for RubricDetail {
    fn from(eval: &RubricEvaluation) -> Self {
        let feedback = if eval.satisfied {
            "Correcto".to_string()
        } else {
            eval.criterion.hint.clone().unwrap_or_default()
        };
        RubricDetail {
            label: eval.criterion.label.clone(),
            correct: eval.satisfied,
            points_awarded: eval.points_awarded,
            points_total: eval.criterion.points,
            feedback,
        }
    }
}

/// Terminal result of the fixed-rubric path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedRubricReport {
    pub score: u32,
    pub max: u32,
    pub details: Vec<RubricDetail>,
}

impl FixedRubricReport {
    /// Score as a rounded percentage of `max` (0 when `max` is 0).
    pub fn percentage(&self) -> u32 {
        if self.max == 0 {
            0
        } else {
            (self.score as f64 * 100.0 / self.max as f64).round() as u32
        }
    }
}
