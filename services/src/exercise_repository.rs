//! Where exercise material comes from.
//!
//! On disk every exercise is a directory below the storage root:
//!
//! ```text
//! <root>/unit_<unit>/exercise_<exercise>/
//!   config.json     (optional)
//!   solution.c | solution.psc
//!   rubric.json     (evaluations only)
//! ```

use crate::error::ServiceError;
use std::fs;
use std::path::{Path, PathBuf};
use util::exercise_config::ExerciseConfig;
use util::fixed_rubric::{FixedRubricRule, load_rubric_in};
use util::languages::{Language, LanguageExt};
use util::paths::{exercise_dir_in, solution_path_in, storage_root};

pub trait ExerciseRepository: Send + Sync {
    fn config(&self, unit: &str, exercise: &str) -> Result<ExerciseConfig, ServiceError>;

    /// Reference solution source code.
    fn solution(&self, unit: &str, exercise: &str) -> Result<String, ServiceError>;

    /// Author rules for an evaluation exercise.
    fn fixed_rubric(&self, unit: &str, exercise: &str) -> Result<Vec<FixedRubricRule>, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct FileExerciseRepository {
    root: PathBuf,
}

impl FileExerciseRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Repository rooted at `STORAGE_ROOT`.
    pub fn from_env() -> Self {
        Self::new(storage_root())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_exists(&self, unit: &str, exercise: &str) -> Result<(), ServiceError> {
        if exercise_dir_in(&self.root, unit, exercise).is_dir() {
            Ok(())
        } else {
            Err(ServiceError::ExerciseNotFound {
                unit: unit.to_string(),
                exercise: exercise.to_string(),
            })
        }
    }
}

impl ExerciseRepository for FileExerciseRepository {
    fn config(&self, unit: &str, exercise: &str) -> Result<ExerciseConfig, ServiceError> {
        self.ensure_exists(unit, exercise)?;
        ExerciseConfig::load_in(&self.root, unit, exercise).map_err(ServiceError::Storage)
    }

    fn solution(&self, unit: &str, exercise: &str) -> Result<String, ServiceError> {
        self.ensure_exists(unit, exercise)?;

        // A language hint narrows the search to one file.
        let candidates: Vec<Language> = match self.config(unit, exercise)?.language {
            Some(language) => vec![language],
            None => Language::ALL.to_vec(),
        };

        for language in candidates {
            let path = solution_path_in(&self.root, unit, exercise, language.solution_filename());
            match fs::read_to_string(&path) {
                Ok(code) => return Ok(code),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => {
                    return Err(ServiceError::Storage(format!(
                        "Failed to read {}: {e}",
                        path.display()
                    )));
                }
            }
        }

        Err(ServiceError::Storage(format!(
            "No solution file for unit {unit}, exercise {exercise}"
        )))
    }

    fn fixed_rubric(&self, unit: &str, exercise: &str) -> Result<Vec<FixedRubricRule>, ServiceError> {
        self.ensure_exists(unit, exercise)?;
        load_rubric_in(&self.root, unit, exercise)
            .map(|file| file.rules)
            .map_err(ServiceError::Storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use util::exercise_config::ExerciseKind;
    use util::paths::rubric_path_in;

    fn repo_with_exercise() -> (TempDir, FileExerciseRepository) {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(exercise_dir_in(tmp.path(), "1", "suma")).unwrap();
        let repo = FileExerciseRepository::new(tmp.path());
        (tmp, repo)
    }

    #[test]
    fn missing_exercise_is_not_found() {
        let (_tmp, repo) = repo_with_exercise();
        let err = repo.config("1", "resta").unwrap_err();
        assert!(matches!(err, ServiceError::ExerciseNotFound { .. }));
    }

    #[test]
    fn config_defaults_when_file_is_absent() {
        let (_tmp, repo) = repo_with_exercise();
        let cfg = repo.config("1", "suma").unwrap();
        assert_eq!(cfg.kind, ExerciseKind::Practice);
    }

    #[test]
    fn finds_solution_by_extension() {
        let (tmp, repo) = repo_with_exercise();
        fs::write(
            solution_path_in(tmp.path(), "1", "suma", "solution.psc"),
            "Definir a Como Entero",
        )
        .unwrap();
        assert_eq!(repo.solution("1", "suma").unwrap(), "Definir a Como Entero");
    }

    #[test]
    fn language_hint_restricts_solution_file() {
        let (tmp, repo) = repo_with_exercise();
        fs::write(
            solution_path_in(tmp.path(), "1", "suma", "solution.psc"),
            "Definir a Como Entero",
        )
        .unwrap();
        let cfg = ExerciseConfig {
            language: Some(Language::C),
            ..ExerciseConfig::default()
        };
        cfg.save_in(tmp.path(), "1", "suma").unwrap();

        assert!(matches!(repo.solution("1", "suma"), Err(ServiceError::Storage(_))));
    }

    #[test]
    fn reads_rubric_rules() {
        let (tmp, repo) = repo_with_exercise();
        fs::write(
            rubric_path_in(tmp.path(), "1", "suma"),
            r#"{"rules":[{"label":"a","pattern":"x","points":5}]}"#,
        )
        .unwrap();

        let rules = repo.fixed_rubric("1", "suma").unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].points, 5);
    }

    #[test]
    fn missing_rubric_is_a_storage_error() {
        let (_tmp, repo) = repo_with_exercise();
        assert_eq!(
            repo.fixed_rubric("1", "suma").unwrap_err(),
            ServiceError::Storage("File not found".into())
        );
    }
}
