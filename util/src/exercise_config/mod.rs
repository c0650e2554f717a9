//! Per-exercise configuration.
//!
//! Each exercise directory may carry a `config.json` describing which scoring
//! path applies and, optionally, the language of the exercise. Every field has
//! a serde default so partial (or absent) files are valid.

use crate::languages::Language;
use crate::paths::{config_path_in, ensure_parent_dir};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Which scoring path an exercise uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseKind {
    /// Unit practice exercise: free-form comparison against the reference solution.
    #[default]
    Practice,
    /// Formal evaluation: scored against an author-supplied regex rubric.
    Evaluation,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExerciseConfig {
    #[serde(default)]
    pub kind: ExerciseKind,

    /// Skips language detection when set.
    #[serde(default)]
    pub language: Option<Language>,

    /// Only one scored attempt per user (evaluations only).
    #[serde(default = "default_single_attempt")]
    pub single_attempt: bool,
}

impl Default for ExerciseConfig {
    fn default() -> Self {
        Self {
            kind: ExerciseKind::default(),
            language: None,
            single_attempt: default_single_attempt(),
        }
    }
}

impl ExerciseConfig {
    /// Whether a second attempt by the same user must be refused.
    pub fn enforces_single_attempt(&self) -> bool {
        self.kind == ExerciseKind::Evaluation && self.single_attempt
    }

    /// Loads `config.json` for an exercise below `root`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_in(root: &Path, unit: &str, exercise: &str) -> Result<Self, String> {
        use std::io::ErrorKind;

        let path = config_path_in(root, unit, exercise);
        let contents = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(match e.kind() {
                    ErrorKind::PermissionDenied => {
                        "Permission denied reading exercise config".to_string()
                    }
                    _ => format!("Failed to read exercise config ({})", e.kind()),
                });
            }
        };

        serde_json::from_str(&contents).map_err(|_| "Invalid exercise config JSON".to_string())
    }

    /// Writes the configuration to `config.json` for an exercise below `root`.
    pub fn save_in(&self, root: &Path, unit: &str, exercise: &str) -> Result<(), String> {
        let path = config_path_in(root, unit, exercise);
        ensure_parent_dir(&path)
            .map_err(|e| format!("Failed to create exercise directory: {:?}", e))?;

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config to JSON: {}", e))?;

        fs::write(&path, json).map_err(|e| format!("Failed to write config file to disk: {:?}", e))
    }
}

fn default_single_attempt() -> bool {
    true
}
