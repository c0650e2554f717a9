//! Services around the evaluator: where exercises live, who already used
//! their attempt, and what gets audited. [`EvaluationService`] ties them
//! together for a single submission.

pub mod attempt_ledger;
pub mod audit_log;
pub mod error;
pub mod evaluation_service;
pub mod exercise_repository;

pub use error::ServiceError;
pub use evaluation_service::{EvaluationService, SubmissionResult};
