//! Fixtures for tests that go through `STORAGE_ROOT` instead of an explicit root.
//!
//! Callers mutate process-wide env, so mark those tests `#[serial]`.

use std::{env, fs, path::PathBuf};
use tempfile::TempDir;

use crate::exercise_config::ExerciseConfig;
use crate::paths::{exercise_dir, storage_root};

/// Points `STORAGE_ROOT` at a fresh temp dir and returns it.
///
/// Exercise trees written below it vanish when the `TempDir` drops.
pub fn setup_test_storage_root() -> TempDir {
    let tmp = TempDir::new().expect("failed to create tempdir");
    let abs = tmp
        .path()
        .canonicalize()
        .unwrap_or_else(|_| tmp.path().to_path_buf());
    unsafe {
        env::set_var("STORAGE_ROOT", &abs);
    }
    tmp
}

/// Lays out `unit_<unit>/exercise_<exercise>` below the current storage root
/// with the given config and reference solution, and returns the directory.
pub fn create_test_exercise(
    unit: &str,
    exercise: &str,
    config: &ExerciseConfig,
    solution: Option<(&str, &str)>,
) -> PathBuf {
    let dir = exercise_dir(unit, exercise);
    fs::create_dir_all(&dir).expect("failed to create exercise dir");
    config
        .save_in(&storage_root(), unit, exercise)
        .expect("failed to write config.json");
    if let Some((filename, code)) = solution {
        fs::write(dir.join(filename), code).expect("failed to write solution");
    }
    dir
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise_config::ExerciseKind;
    use serial_test::serial;

    #[test]
    #[serial]
    fn exercise_lands_below_temp_root() {
        let tmp = setup_test_storage_root();
        let config = ExerciseConfig {
            kind: ExerciseKind::Evaluation,
            ..ExerciseConfig::default()
        };
        let dir = create_test_exercise(
            "3",
            "arreglos",
            &config,
            Some(("solution.c", "int a = 1;")),
        );

        assert_eq!(storage_root(), tmp.path().canonicalize().unwrap());
        assert!(dir.starts_with(storage_root()));
        assert_eq!(fs::read_to_string(dir.join("solution.c")).unwrap(), "int a = 1;");
        assert_eq!(
            ExerciseConfig::load_in(&storage_root(), "3", "arreglos")
                .unwrap()
                .kind,
            ExerciseKind::Evaluation
        );
        unsafe { env::remove_var("STORAGE_ROOT") };
    }
}
