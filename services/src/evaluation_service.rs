//! Submission flow for one student and one exercise.
//!
//! 1. Load the exercise configuration.
//! 2. Practice exercises go through the free-form path against the stored solution.
//! 3. Evaluations claim the attempt in the ledger before scoring against the
//!    stored rubric; the claim is released if scoring fails.
//! 4. Every submission is audited, failed ones included.

use crate::attempt_ledger::AttemptLedger;
use crate::audit_log::{AuditEntry, AuditLog};
use crate::error::ServiceError;
use crate::exercise_repository::ExerciseRepository;
use evaluator::report::{EvaluationOutcome, FixedRubricReport};
use evaluator::scorer::is_success;
use evaluator::{EvaluationJob, FixedRubricJob};
use serde::Serialize;
use std::sync::Arc;
use util::exercise_config::{ExerciseConfig, ExerciseKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tipo", content = "resultado", rename_all = "lowercase")]
pub enum SubmissionResult {
    Practice(EvaluationOutcome),
    Evaluation(FixedRubricReport),
}

impl SubmissionResult {
    /// Score on a 0..=100 scale.
    pub fn score(&self) -> u32 {
        match self {
            SubmissionResult::Practice(outcome) => outcome.score,
            SubmissionResult::Evaluation(report) => report.percentage(),
        }
    }

    /// Practice: similarity threshold. Evaluation: same threshold on the rubric percentage.
    pub fn success(&self) -> bool {
        match self {
            SubmissionResult::Practice(outcome) => outcome.success,
            SubmissionResult::Evaluation(report) => is_success(report.percentage() as f64),
        }
    }
}

pub struct EvaluationService {
    repository: Arc<dyn ExerciseRepository>,
    ledger: Arc<dyn AttemptLedger>,
    audit: Arc<dyn AuditLog>,
}

impl EvaluationService {
    pub fn new(
        repository: Arc<dyn ExerciseRepository>,
        ledger: Arc<dyn AttemptLedger>,
        audit: Arc<dyn AuditLog>,
    ) -> Self {
        Self {
            repository,
            ledger,
            audit,
        }
    }

    /// Evaluates `code` for `user_id` on the given exercise.
    ///
    /// Storage and rubric faults are logged and surfaced as
    /// [`ServiceError::Internal`]; `ExerciseNotFound` and `AttemptAlreadyUsed`
    /// are returned unchanged.
    pub fn submit(
        &self,
        user_id: &str,
        unit: &str,
        exercise: &str,
        code: &str,
    ) -> Result<SubmissionResult, ServiceError> {
        let result = self.run(user_id, unit, exercise, code);

        let (success, score) = match &result {
            Ok(submission) => (submission.success(), submission.score()),
            Err(_) => (false, 0),
        };
        self.audit
            .record(AuditEntry::now(user_id, unit, exercise, success, score));

        result.map_err(|err| {
            if err.is_user_facing() {
                err
            } else {
                log::error!(
                    "Evaluation failed for user {} (unit {}, exercise {}): {}",
                    user_id,
                    unit,
                    exercise,
                    err
                );
                ServiceError::Internal
            }
        })
    }

    fn run(
        &self,
        user_id: &str,
        unit: &str,
        exercise: &str,
        code: &str,
    ) -> Result<SubmissionResult, ServiceError> {
        let config = self.repository.config(unit, exercise)?;
        match config.kind {
            ExerciseKind::Practice => self.practice(&config, unit, exercise, code),
            ExerciseKind::Evaluation => self.evaluation(&config, user_id, unit, exercise, code),
        }
    }

    fn practice(
        &self,
        config: &ExerciseConfig,
        unit: &str,
        exercise: &str,
        code: &str,
    ) -> Result<SubmissionResult, ServiceError> {
        let solution = self.repository.solution(unit, exercise)?;

        let mut job = EvaluationJob::new(code, &solution);
        if let Some(language) = config.language {
            job = job.with_language(language);
        }
        Ok(SubmissionResult::Practice(job.evaluate()?))
    }

    fn evaluation(
        &self,
        config: &ExerciseConfig,
        user_id: &str,
        unit: &str,
        exercise: &str,
        code: &str,
    ) -> Result<SubmissionResult, ServiceError> {
        let single_attempt = config.enforces_single_attempt();
        if single_attempt && !self.ledger.try_claim(user_id, unit, exercise) {
            log::warn!(
                "User {} tried a second attempt on unit {}, exercise {}",
                user_id,
                unit,
                exercise
            );
            return Err(ServiceError::AttemptAlreadyUsed);
        }

        let report = match self.score_fixed(unit, exercise, code) {
            Ok(report) => report,
            Err(err) => {
                // a broken exercise must not consume the student's attempt
                if single_attempt {
                    self.ledger.reset(user_id, unit, exercise);
                }
                return Err(err);
            }
        };
        if !single_attempt {
            self.ledger.record_attempt(user_id, unit, exercise);
        }

        log::info!(
            "User {} scored {}/{} on unit {}, exercise {}",
            user_id,
            report.score,
            report.max,
            unit,
            exercise
        );
        Ok(SubmissionResult::Evaluation(report))
    }

    fn score_fixed(
        &self,
        unit: &str,
        exercise: &str,
        code: &str,
    ) -> Result<FixedRubricReport, ServiceError> {
        let rules = self.repository.fixed_rubric(unit, exercise)?;
        Ok(FixedRubricJob::new(code, &rules).score()?)
    }
}
