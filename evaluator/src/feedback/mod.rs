//! # Feedback Strategies Module
//!
//! Feedback strategies implement [`crate::traits::feedback::Feedback`].
//!
//! - [`auto_feedback`]: template feedback driven by similarity bands and rubric results.

pub mod auto_feedback;

/// One-line summary for a submission blocked by syntax errors.
pub fn summarize_syntax(error_count: usize) -> String {
    if error_count == 1 {
        "Se encontró 1 error de sintaxis".to_string()
    } else {
        format!("Se encontraron {error_count} errores de sintaxis")
    }
}

/// One-line summary for a submission that reached scoring.
pub fn summarize_logic(score: u32, similarity: f64, success: bool) -> String {
    let verdict = if success { "Aprobado" } else { "No aprobado" };
    format!("Puntuación: {score}/100 · Similitud: {similarity:.1}% · {verdict}")
}
