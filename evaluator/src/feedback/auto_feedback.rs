//! # AutoFeedback Strategy
//!
//! Template-based feedback for the free-form path.
//!
//! ## Overview
//!
//! - A headline chosen by similarity band (≥90, ≥70, ≥50, below).
//! - Satisfied criteria under a "✅" header, with their points.
//! - Unsatisfied criteria under a "❌" header, without points.
//! - A closing line with the similarity percentage.
//!
//! Recommendations come from similarity bands (<30, <50, <70) or, after a
//! syntax failure, from a fixed checklist.

use crate::traits::feedback::Feedback;
use crate::types::{ComparisonResult, RubricEvaluation, SyntaxError};

pub const CORRECT_HEADER: &str = "✅ Aspectos correctos:";
pub const IMPROVE_HEADER: &str = "❌ Aspectos a mejorar:";

#[derive(Debug, Default)]
pub struct AutoFeedback;

impl AutoFeedback {
    fn headline(similarity: f64) -> &'static str {
        match similarity {
            s if s >= 90.0 => "🎉 ¡Excelente! Tu código es prácticamente idéntico a la solución esperada.",
            s if s >= 70.0 => "👍 ¡Muy bien! La estructura de tu código es correcta.",
            s if s >= 50.0 => "📈 Buen avance, pero tu código necesita algunos ajustes.",
            _ => "💪 Tu código necesita más trabajo. Revisa el enunciado y vuelve a intentarlo.",
        }
    }
}

impl Feedback for AutoFeedback {
    fn assemble_feedback(
        &self,
        comparison: &ComparisonResult,
        evaluations: &[RubricEvaluation],
    ) -> Vec<String> {
        let mut messages = vec![Self::headline(comparison.similarity).to_string()];

        let (satisfied, missed): (Vec<_>, Vec<_>) =
            evaluations.iter().partition(|e| e.satisfied);

        if !satisfied.is_empty() {
            messages.push(CORRECT_HEADER.to_string());
            for eval in satisfied {
                messages.push(format!(
                    "  • {} (+{} pts)",
                    eval.criterion.label, eval.points_awarded
                ));
            }
        }

        if !missed.is_empty() {
            messages.push(IMPROVE_HEADER.to_string());
            for eval in missed {
                messages.push(format!("  • {}", eval.criterion.label));
            }
        }

        messages.push(format!(
            "📊 Similitud con la solución: {:.1}%",
            comparison.similarity
        ));
        messages
    }

    fn recommendations(&self, similarity: f64) -> Vec<String> {
        let advice: &[&str] = match similarity {
            s if s < 30.0 => &[
                "Revisa el enunciado y asegúrate de entender qué se pide.",
                "Repasa la teoría de la unidad y los ejemplos resueltos.",
            ],
            s if s < 50.0 => &[
                "Revisa la declaración e inicialización de tus variables.",
                "Verifica que las estructuras de control sigan la lógica pedida.",
            ],
            s if s < 70.0 => &[
                "Vas por buen camino: revisa los valores y nombres que usaste.",
                "Comprueba el orden de las instrucciones.",
            ],
            _ => &[],
        };
        advice.iter().map(|s| s.to_string()).collect()
    }

    fn syntax_feedback(&self, errors: &[SyntaxError]) -> Vec<String> {
        errors
            .iter()
            .map(|e| {
                if e.line > 0 {
                    format!("Línea {}: {}", e.line, e.message)
                } else {
                    e.message.clone()
                }
            })
            .collect()
    }

    fn syntax_recommendations(&self) -> Vec<String> {
        vec![
            "Verifica que cada instrucción termine en punto y coma (;).".to_string(),
            "Asegúrate de declarar todas las variables antes de usarlas.".to_string(),
            "Comprueba que cada estructura abierta (if, for, Si, Para...) esté bien cerrada."
                .to_string(),
        ]
    }
}
