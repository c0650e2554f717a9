//! Author-supplied rubrics for formal evaluations.
//!
//! A rubric is stored as `rubric.json` inside the exercise directory and lists
//! labelled regex rules in the order the author wants them reported.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::paths::rubric_path_in;

/// One scoring rule: `points` are awarded when `pattern` matches the
/// normalized submission, otherwise `feedback` is shown to the student.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FixedRubricRule {
    pub label: String,
    #[serde(alias = "regex")]
    pub pattern: String,
    pub points: u32,
    #[serde(default)]
    pub feedback: String,
}

impl FixedRubricRule {
    pub fn new(label: &str, pattern: &str, points: u32, feedback: &str) -> Self {
        Self {
            label: label.to_string(),
            pattern: pattern.to_string(),
            points,
            feedback: feedback.to_string(),
        }
    }
}

/// Authors may write only `rules`; the metadata fields are optional and
/// `total_points` is always recomputed on load.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FixedRubricFile {
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
    pub rules: Vec<FixedRubricRule>,
    #[serde(default)]
    pub total_points: u32,
}

impl FixedRubricFile {
    pub fn recompute_total(&mut self) -> u32 {
        self.total_points = self.rules.iter().map(|r| r.points).sum();
        self.total_points
    }
}

/// Read `rubric.json` for an exercise below `root`.
pub fn load_rubric_in(root: &Path, unit: &str, exercise: &str) -> Result<FixedRubricFile, String> {
    use std::io::ErrorKind;

    let path = rubric_path_in(root, unit, exercise);

    let s = match fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) => {
            let msg = match e.kind() {
                ErrorKind::NotFound => "File not found".to_string(),
                ErrorKind::PermissionDenied => "Permission denied reading rubric".to_string(),
                ErrorKind::InvalidData => "Rubric file is not valid UTF-8".to_string(),
                _ => format!("Failed to read rubric ({})", e.kind()),
            };
            return Err(msg);
        }
    };

    let mut rubric = serde_json::from_str::<FixedRubricFile>(&s)
        .map_err(|_| "Invalid rubric JSON".to_string())?;
    if rubric.recompute_total() == 0 && !rubric.rules.is_empty() {
        tracing::warn!(unit, exercise, "rubric rules are all worth zero points");
    }
    Ok(rubric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_rubric(root: &Path, body: &str) {
        let path = rubric_path_in(root, "1", "edad");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    #[test]
    fn accepts_regex_alias_and_missing_feedback() {
        let rule: FixedRubricRule =
            serde_json::from_str(r#"{"label":"x","regex":"a+","points":5}"#).unwrap();
        assert_eq!(rule.pattern, "a+");
        assert_eq!(rule.feedback, "");
    }

    #[test]
    fn rules_only_file_loads_and_keeps_order() {
        let td = TempDir::new().unwrap();
        write_rubric(
            td.path(),
            r#"{"rules":[
                {"label":"Declara edad","pattern":"int\\s+edad","points":40,"feedback":"Declara edad"},
                {"label":"Imprime edad","regex":"printf\\s*\\(","points":60}
            ]}"#,
        );

        let loaded = load_rubric_in(td.path(), "1", "edad").unwrap();
        assert_eq!(loaded.total_points, 100);
        assert_eq!(loaded.updated_at, DateTime::<Utc>::default());
        let labels: Vec<_> = loaded.rules.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Declara edad", "Imprime edad"]);
        assert_eq!(loaded.rules[1].pattern, r"printf\s*\(");
    }

    #[test]
    fn missing_rubric_reports_not_found() {
        let td = TempDir::new().unwrap();
        let err = load_rubric_in(td.path(), "9", "nada").unwrap_err();
        assert_eq!(err, "File not found");
    }

    #[test]
    fn malformed_rubric_is_rejected() {
        let td = TempDir::new().unwrap();
        write_rubric(td.path(), r#"{"reglas":[]}"#);
        assert_eq!(
            load_rubric_in(td.path(), "1", "edad").unwrap_err(),
            "Invalid rubric JSON"
        );
    }

    #[test]
    fn stale_total_is_recomputed_on_load() {
        let td = TempDir::new().unwrap();
        let file = FixedRubricFile {
            updated_at: Utc::now(),
            rules: vec![
                FixedRubricRule::new("a", "x", 40, ""),
                FixedRubricRule::new("b", "y", 60, ""),
            ],
            total_points: 3,
        };
        write_rubric(td.path(), &serde_json::to_string(&file).unwrap());

        let loaded = load_rubric_in(td.path(), "1", "edad").unwrap();
        assert_eq!(loaded.total_points, 100);
        assert_eq!(loaded.updated_at, file.updated_at);
    }
}
