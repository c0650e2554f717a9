use evaluator::error::EvaluatorError;
use thiserror::Error;

/// Message shown to students when evaluation fails for reasons that are not theirs.
pub const GENERIC_FAILURE_MESSAGE: &str = "Ocurrió un error al evaluar tu código. Inténtalo de nuevo.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("El ejercicio {exercise} de la unidad {unit} no existe")]
    ExerciseNotFound { unit: String, exercise: String },

    #[error("Ya utilizaste tu intento para esta evaluación")]
    AttemptAlreadyUsed,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Evaluator error: {0}")]
    Evaluator(#[from] EvaluatorError),

    /// Technical failure already logged; only the generic message is exposed.
    #[error("{}", GENERIC_FAILURE_MESSAGE)]
    Internal,
}

impl ServiceError {
    /// Whether the error is safe to show to a student as is.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            ServiceError::ExerciseNotFound { .. }
                | ServiceError::AttemptAlreadyUsed
                | ServiceError::Internal
        )
    }
}
