//! Rubric derived automatically from a reference solution.
//!
//! Each line of the (raw, un-normalized) solution is matched against a table
//! of criterion rules; the first rule that matches contributes one criterion.
//! Lines that match nothing contribute nothing. A solution that yields no
//! criteria at all gets three generic ones instead.
//!
//! Satisfaction is deliberately coarse: every criterion counts as satisfied
//! as soon as the comparison matched at least one line, and none do
//! otherwise. Criteria are not checked against their own pattern.

use crate::traits::rubric::{Rubric, RubricInput};
use crate::types::{CriterionKind, RubricCriterion, RubricEvaluation};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// One entry of the criterion table.
pub struct CriterionRule {
    pub name: &'static str,
    pub pattern: Regex,
    pub points: u32,
    pub kind: CriterionKind,
    label: fn(&Captures<'_>) -> String,
}

impl CriterionRule {
    /// Builds the criterion for `line` if this rule matches it.
    pub fn apply(&self, line: &str) -> Option<RubricCriterion> {
        self.pattern
            .captures(line)
            .map(|caps| RubricCriterion::new((self.label)(&caps), self.points, self.kind))
    }
}

lazy_static! {
    /// Checked in order; the first match wins.
    pub static ref CRITERION_RULES: Vec<CriterionRule> = vec![
        CriterionRule {
            name: "declaracion",
            pattern: Regex::new(r"^(int|float|char|double)\s+([A-Za-z_]\w*)\s*=\s*(.+?)\s*;$").unwrap(),
            points: 20,
            kind: CriterionKind::Declaracion,
            label: |c| format!("Declaración de la variable '{}' ({})", &c[2], &c[1]),
        },
        CriterionRule {
            name: "asignacion",
            pattern: Regex::new(r"^([A-Za-z_]\w*)\s*=\s*([^=].*?)\s*;$").unwrap(),
            points: 15,
            kind: CriterionKind::Asignacion,
            label: |c| format!("Asignación a la variable '{}'", &c[1]),
        },
        CriterionRule {
            name: "condicional",
            pattern: Regex::new(r"^if\s*\((.+)\)").unwrap(),
            points: 25,
            kind: CriterionKind::Condicional,
            label: |c| format!("Condicional if ({})", c[1].trim()),
        },
        CriterionRule {
            name: "bucle",
            pattern: Regex::new(r"^for\s*\(([^;]*);([^;]*);([^)]*)\)").unwrap(),
            points: 30,
            kind: CriterionKind::Bucle,
            label: |c| format!("Bucle for ({}; {}; {})", c[1].trim(), c[2].trim(), c[3].trim()),
        },
    ];
}

/// Criteria used when the solution yields none.
pub fn fallback_criteria() -> Vec<RubricCriterion> {
    vec![
        RubricCriterion::new("Estructura general", 40, CriterionKind::Estructura),
        RubricCriterion::new("Declaraciones de variables", 30, CriterionKind::Declaracion),
        RubricCriterion::new("Lógica y algoritmos", 30, CriterionKind::Logica),
    ]
}

/// Derives the ordered criterion list for a raw reference solution.
pub fn generate_criteria(solution: &str) -> Vec<RubricCriterion> {
    let criteria: Vec<RubricCriterion> = solution
        .lines()
        .map(str::trim)
        .filter_map(|line| CRITERION_RULES.iter().find_map(|rule| rule.apply(line)))
        .collect();

    if criteria.is_empty() {
        fallback_criteria()
    } else {
        criteria
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedRubric {
    criteria: Vec<RubricCriterion>,
}

impl GeneratedRubric {
    pub fn from_solution(solution: &str) -> Self {
        Self {
            criteria: generate_criteria(solution),
        }
    }
}

impl Rubric for GeneratedRubric {
    fn criteria(&self) -> &[RubricCriterion] {
        &self.criteria
    }

    fn evaluate(&self, input: &RubricInput<'_>) -> Vec<RubricEvaluation> {
        let any_line_matched = input
            .comparison
            .is_some_and(|c| !c.matched_lines.is_empty());

        self.criteria
            .iter()
            .cloned()
            .map(|criterion| RubricEvaluation::new(criterion, any_line_matched))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ComparisonResult, DiffLine, MatchedLine};

    fn rule(name: &str) -> &'static CriterionRule {
        CRITERION_RULES.iter().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn declaration_rule() {
        let c = rule("declaracion").apply("int edad = 25;").unwrap();
        assert_eq!(c.points, 20);
        assert_eq!(c.kind, CriterionKind::Declaracion);
        assert!(c.label.contains("edad"));
        assert!(rule("declaracion").apply("int edad;").is_none());
    }

    #[test]
    fn assignment_rule_rejects_comparison() {
        assert_eq!(rule("asignacion").apply("total = a + b;").unwrap().points, 15);
        assert!(rule("asignacion").apply("x == 1;").is_none());
    }

    #[test]
    fn conditional_and_loop_rules() {
        let c = rule("condicional").apply("if (edad >= 18) {").unwrap();
        assert_eq!(c.points, 25);
        assert_eq!(c.label, "Condicional if (edad >= 18)");

        let b = rule("bucle").apply("for (i = 0; i < 10; i++) {").unwrap();
        assert_eq!(b.points, 30);
        assert_eq!(b.kind, CriterionKind::Bucle);
    }

    #[test]
    fn declaration_takes_precedence_over_assignment() {
        let criteria = generate_criteria("int x = 1;");
        assert_eq!(criteria.len(), 1);
        assert_eq!(criteria[0].kind, CriterionKind::Declaracion);
    }

    #[test]
    fn generates_in_solution_order() {
        let solution = "int main() {\n  int suma = 0;\n  for (i = 0; i < 5; i++) {\n    suma = suma + i;\n  }\n  if (suma > 3) {\n    printf(\"%d\", suma);\n  }\n}";
        let kinds: Vec<CriterionKind> = generate_criteria(solution).iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                CriterionKind::Declaracion,
                CriterionKind::Bucle,
                CriterionKind::Asignacion,
                CriterionKind::Condicional,
            ]
        );
    }

    #[test]
    fn falls_back_to_generic_criteria() {
        let criteria = generate_criteria("Escribir \"Hola\"");
        assert_eq!(criteria, fallback_criteria());
        let rubric = GeneratedRubric::from_solution("");
        assert_eq!(rubric.total_points(), 100);
    }

    #[test]
    fn satisfaction_follows_any_matched_line() {
        let rubric = GeneratedRubric::from_solution("int a = 1;\nif (a > 0) {");
        let matched = ComparisonResult {
            similarity: 50.0,
            matched_lines: vec![MatchedLine { line: 1, content: "x".into() }],
            diff_lines: vec![DiffLine { line: 2, expected: "y".into(), actual: "z".into() }],
        };
        let input = RubricInput { normalized_code: "x", comparison: Some(&matched) };
        let evals = rubric.evaluate(&input);
        assert!(evals.iter().all(|e| e.satisfied));
        assert_eq!(evals.iter().map(|e| e.points_awarded).sum::<u32>(), 45);

        let unmatched = ComparisonResult { similarity: 0.0, matched_lines: vec![], diff_lines: vec![] };
        let input = RubricInput { normalized_code: "x", comparison: Some(&unmatched) };
        assert!(rubric.evaluate(&input).iter().all(|e| !e.satisfied && e.points_awarded == 0));

        let input = RubricInput { normalized_code: "x", comparison: None };
        assert!(rubric.evaluate(&input).iter().all(|e| !e.satisfied));
    }
}
