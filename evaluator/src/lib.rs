//! # Evaluator Library
//!
//! Core logic for evaluating student code written in C or PSeInt against a
//! reference solution or an author-supplied rubric.
//!
//! ## Key Concepts
//! - **EvaluationJob**: the free-form path. Detects the language, validates
//!   syntax, compares the normalized submission with the normalized solution,
//!   scores a rubric generated from the solution and composes feedback.
//! - **FixedRubricJob**: the fixed-rubric path. Matches an author's labelled
//!   regex rules against the normalized submission.
//! - **Comparators**, **Validators**, **Feedback**: pluggable stages, see [`traits`].
//! - **Reports**: serializable outcomes, see [`report`].
//!
//! Student mistakes never produce an `Err`: they produce an outcome with a
//! low score and feedback. Errors are reserved for broken configuration such
//! as an invalid rubric pattern.

pub mod comparators;
pub mod detector;
pub mod error;
pub mod feedback;
pub mod report;
pub mod rubric;
pub mod scorer;
pub mod traits;
pub mod types;
pub mod utilities;
pub mod validators;

use crate::comparators::positional_comparator::PositionalComparator;
use crate::error::EvaluatorError;
use crate::feedback::auto_feedback::AutoFeedback;
use crate::report::{EvaluationDetails, EvaluationOutcome, FixedRubricReport};
use crate::rubric::fixed_rubric::FixedRubric;
use crate::rubric::generated_rubric::GeneratedRubric;
use crate::traits::comparator::CodeComparator;
use crate::traits::feedback::Feedback;
use crate::traits::rubric::{Rubric, RubricInput};
use crate::types::{ErrorKind, SyntaxError};
use crate::utilities::normalization::normalize_code;

use util::fixed_rubric::FixedRubricRule;
use util::languages::Language;

pub use crate::detector::detect_language;

/// An evaluation of one free-form submission against a reference solution.
///
/// # Fields
/// - `student`: submitted source code, as typed.
/// - `solution`: reference solution, as stored.
/// - `language`: explicit language; detected from `student` when absent.
/// - `comparator`: strategy for aligning submission and solution.
/// - `feedback`: strategy for composing messages and recommendations.
pub struct EvaluationJob<'a> {
    student: &'a str,
    solution: &'a str,
    language: Option<Language>,
    comparator: Box<dyn CodeComparator + 'a>,
    feedback: Box<dyn Feedback + 'a>,
}

impl<'a> EvaluationJob<'a> {
    /// Create a job with the default positional comparator and template feedback.
    pub fn new(student: &'a str, solution: &'a str) -> Self {
        Self {
            student,
            solution,
            language: None,
            comparator: Box::new(PositionalComparator),
            feedback: Box::new(AutoFeedback),
        }
    }

    /// Skip detection and validate as `language`.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Set a custom comparator strategy for this job.
    ///
    /// # Arguments
    /// * `comparator` - An implementation of the `CodeComparator` trait.
    pub fn with_comparator<C: CodeComparator + 'a>(mut self, comparator: C) -> Self {
        self.comparator = Box::new(comparator);
        self
    }

    /// Set a custom feedback strategy for this job.
    ///
    /// # Arguments
    /// * `feedback` - An implementation of the `Feedback` trait.
    pub fn with_feedback<F: Feedback + 'a>(mut self, feedback: F) -> Self {
        self.feedback = Box::new(feedback);
        self
    }

    /// Run the evaluation.
    ///
    /// # Steps
    /// 1. Resolves the language (explicit or detected).
    /// 2. Validates syntax. Any error halts here with score 0.
    /// 3. Normalizes both sides and compares them.
    /// 4. Generates a rubric from the solution and evaluates it.
    /// 5. Computes score and success and composes feedback.
    ///
    /// The current pipeline never fails; the `Result` leaves room for
    /// stages that can, such as custom comparators backed by external tools.
    pub fn evaluate(self) -> Result<EvaluationOutcome, EvaluatorError> {
        let language = self
            .language
            .unwrap_or_else(|| detect_language(self.student));

        let validator = validators::validator_for(language);
        let syntax_errors = validator.validate(self.student);
        tracing::debug!(
            language = %validator.language(),
            errors = syntax_errors.len(),
            "syntax validation finished"
        );

        if !syntax_errors.is_empty() {
            return Ok(self.syntax_outcome(language, syntax_errors));
        }

        let normalized_student = normalize_code(self.student);
        let normalized_solution = normalize_code(self.solution);
        let comparison = self
            .comparator
            .compare(&normalized_student, &normalized_solution);
        tracing::debug!(similarity = comparison.similarity, "comparison finished");

        let rubric = GeneratedRubric::from_solution(self.solution);
        let evaluations = rubric.evaluate(&RubricInput {
            normalized_code: &normalized_student,
            comparison: Some(&comparison),
        });

        let rubric_score = scorer::compute_rubric_score(&evaluations);
        let score = scorer::compute_final_score(comparison.similarity, rubric_score);
        let success = scorer::is_success(comparison.similarity);

        let feedback = self.feedback.assemble_feedback(&comparison, &evaluations);
        let recommendations = self.feedback.recommendations(comparison.similarity);
        let summary = feedback::summarize_logic(score, comparison.similarity, success);

        Ok(EvaluationOutcome {
            success,
            feedback,
            score,
            rubric: evaluations,
            language,
            error_kind: ErrorKind::Logica,
            similarity: Some(comparison.similarity),
            details: EvaluationDetails {
                syntax_errors: Vec::new(),
                comparison: Some(comparison),
                rubric_score,
            },
            recommendations,
            summary,
        })
    }

    fn syntax_outcome(&self, language: Language, errors: Vec<SyntaxError>) -> EvaluationOutcome {
        EvaluationOutcome {
            success: false,
            feedback: self.feedback.syntax_feedback(&errors),
            score: 0,
            rubric: Vec::new(),
            language,
            error_kind: ErrorKind::Sintaxis,
            similarity: None,
            recommendations: self.feedback.syntax_recommendations(),
            summary: feedback::summarize_syntax(errors.len()),
            details: EvaluationDetails {
                syntax_errors: errors,
                comparison: None,
                rubric_score: 0.0,
            },
        }
    }
}

/// Scoring of one submission against an author's fixed rubric.
pub struct FixedRubricJob<'a> {
    code: &'a str,
    rules: &'a [FixedRubricRule],
}

impl<'a> FixedRubricJob<'a> {
    pub fn new(code: &'a str, rules: &'a [FixedRubricRule]) -> Self {
        Self { code, rules }
    }

    /// Normalizes the submission and matches every rule against it.
    ///
    /// # Errors
    /// Fails only when the rubric itself is invalid, see [`FixedRubric::new`].
    pub fn score(self) -> Result<FixedRubricReport, EvaluatorError> {
        let rubric = FixedRubric::new(self.rules)?;
        let report = rubric.score(&normalize_code(self.code));
        tracing::debug!(score = report.score, max = report.max, "fixed rubric scored");
        Ok(report)
    }
}
