//! Rubric built from an author's labelled regex rules.
//!
//! Used for formal evaluations. Each rule is matched against the normalized
//! submission; there is no comparison with a reference solution and no
//! language detection. Patterns are compiled once, when the rubric is built,
//! so a broken pattern is reported before any submission is scored.

use crate::error::EvaluatorError;
use crate::report::{FixedRubricReport, RubricDetail};
use crate::traits::rubric::{Rubric, RubricInput};
use crate::types::{CriterionKind, RubricCriterion, RubricEvaluation};
use regex::Regex;
use util::fixed_rubric::FixedRubricRule;

#[derive(Debug, Clone)]
pub struct FixedRubric {
    criteria: Vec<RubricCriterion>,
    patterns: Vec<Regex>,
}

impl FixedRubric {
    /// Validates and compiles `rules`, keeping their order.
    ///
    /// # Errors
    /// - [`EvaluatorError::EmptyRubric`] when `rules` is empty.
    /// - [`EvaluatorError::InvalidRubric`] when a rule awards no points.
    /// - [`EvaluatorError::InvalidPattern`] when a pattern does not compile.
    pub fn new(rules: &[FixedRubricRule]) -> Result<Self, EvaluatorError> {
        if rules.is_empty() {
            return Err(EvaluatorError::EmptyRubric);
        }

        let mut criteria = Vec::with_capacity(rules.len());
        let mut patterns = Vec::with_capacity(rules.len());

        for rule in rules {
            if rule.points == 0 {
                return Err(EvaluatorError::InvalidRubric(format!(
                    "rule '{}' awards no points",
                    rule.label
                )));
            }
            let pattern = Regex::new(&rule.pattern).map_err(|e| EvaluatorError::InvalidPattern {
                label: rule.label.clone(),
                message: e.to_string(),
            })?;

            criteria.push(RubricCriterion {
                label: rule.label.clone(),
                points: rule.points,
                kind: CriterionKind::Regla,
                hint: Some(rule.feedback.clone()),
            });
            patterns.push(pattern);
        }

        Ok(Self { criteria, patterns })
    }

    /// Scores an already-normalized submission.
    pub fn score(&self, normalized_code: &str) -> FixedRubricReport {
        let input = RubricInput {
            normalized_code,
            comparison: None,
        };
        let details: Vec<RubricDetail> = self
            .evaluate(&input)
            .iter()
            .map(RubricDetail::from)
            .collect();

        FixedRubricReport {
            score: details.iter().map(|d| d.points_awarded).sum(),
            max: self.total_points(),
            details,
        }
    }
}

impl Rubric for FixedRubric {
    fn criteria(&self) -> &[RubricCriterion] {
        &self.criteria
    }

    fn evaluate(&self, input: &RubricInput<'_>) -> Vec<RubricEvaluation> {
        self.criteria
            .iter()
            .zip(&self.patterns)
            .map(|(criterion, pattern)| {
                let matched = pattern.is_match(input.normalized_code);
                if !matched {
                    tracing::debug!(rule = %criterion.label, "rubric rule not matched");
                }
                RubricEvaluation::new(criterion.clone(), matched)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edad_rule() -> FixedRubricRule {
        FixedRubricRule::new(
            "Declara edad",
            r"int\s+edad\s*=\s*25\s*;",
            40,
            "Declara la variable edad con el valor 25",
        )
    }

    #[test]
    fn matching_rule_awards_its_points() {
        let rubric = FixedRubric::new(&[edad_rule()]).unwrap();
        let report = rubric.score("int edad = 25 ;");
        assert_eq!(report.score, 40);
        assert_eq!(report.max, 40);
        assert!(report.details[0].correct);
        assert_eq!(report.details[0].points_awarded, 40);
        assert_eq!(report.details[0].feedback, "Correcto");
    }

    #[test]
    fn missing_rule_shows_author_feedback() {
        let rules = vec![
            edad_rule(),
            FixedRubricRule::new("Imprime", r"printf\s*\(", 60, "Usa printf para mostrar la edad"),
        ];
        let rubric = FixedRubric::new(&rules).unwrap();
        let report = rubric.score("int edad = 25; puts(\"25\");");

        assert_eq!(report.score, 40);
        assert_eq!(report.max, 100);
        assert_eq!(report.details.len(), 2);
        assert_eq!(report.details[1].label, "Imprime");
        assert!(!report.details[1].correct);
        assert_eq!(report.details[1].points_awarded, 0);
        assert_eq!(report.details[1].points_total, 60);
        assert_eq!(report.details[1].feedback, "Usa printf para mostrar la edad");
    }

    #[test]
    fn empty_rubric_is_rejected() {
        assert_eq!(FixedRubric::new(&[]).unwrap_err(), EvaluatorError::EmptyRubric);
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let bad = FixedRubricRule::new("Roto", "[", 10, "");
        match FixedRubric::new(&[bad]) {
            Err(EvaluatorError::InvalidPattern { label, .. }) => assert_eq!(label, "Roto"),
            other => panic!("expected InvalidPattern, got {other:?}"),
        }
    }

    #[test]
    fn zero_point_rule_is_rejected() {
        let rule = FixedRubricRule::new("Nada", "x", 0, "");
        assert!(matches!(
            FixedRubric::new(&[rule]),
            Err(EvaluatorError::InvalidRubric(_))
        ));
    }

    #[test]
    fn criteria_keep_author_order_and_kind() {
        let rules = vec![
            FixedRubricRule::new("B", "b", 1, ""),
            FixedRubricRule::new("A", "a", 2, ""),
        ];
        let rubric = FixedRubric::new(&rules).unwrap();
        let labels: Vec<&str> = rubric.criteria().iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["B", "A"]);
        assert!(rubric.criteria().iter().all(|c| c.kind == CriterionKind::Regla));
        assert_eq!(rubric.total_points(), 3);
    }
}
