use std::{fs, io, path::{Path, PathBuf}};

/// Ensure the parent directory of a *file path* exists (no-op if none).
pub fn ensure_parent_dir<P: AsRef<Path>>(file_path: P) -> io::Result<()> {
    if let Some(parent) = file_path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Global storage root (absolute), from `STORAGE_ROOT`.
/// If relative in env, resolve against current_dir().
pub fn storage_root() -> PathBuf {
    let root = std::env::var("STORAGE_ROOT").unwrap_or_else(|_| "./data/exercises".into());
    let p = PathBuf::from(root);
    if p.is_absolute() {
        p
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(p)
    }
}

// ─── Directory helpers for exercises ──────────────────────────────

// {root}/unit_{unit}
pub fn unit_dir_in(root: &Path, unit: &str) -> PathBuf {
    root.join(format!("unit_{unit}"))
}

// {root}/unit_{unit}/exercise_{exercise}
pub fn exercise_dir_in(root: &Path, unit: &str, exercise: &str) -> PathBuf {
    unit_dir_in(root, unit).join(format!("exercise_{exercise}"))
}

pub fn exercise_dir(unit: &str, exercise: &str) -> PathBuf {
    exercise_dir_in(&storage_root(), unit, exercise)
}

pub fn config_path_in(root: &Path, unit: &str, exercise: &str) -> PathBuf {
    exercise_dir_in(root, unit, exercise).join("config.json")
}

pub fn rubric_path_in(root: &Path, unit: &str, exercise: &str) -> PathBuf {
    exercise_dir_in(root, unit, exercise).join("rubric.json")
}

pub fn solution_path_in(root: &Path, unit: &str, exercise: &str, filename: &str) -> PathBuf {
    exercise_dir_in(root, unit, exercise).join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn root_resolves_relative_against_cwd() {
        unsafe { std::env::set_var("STORAGE_ROOT", "storage_rel") };
        let expected = std::env::current_dir().unwrap().join("storage_rel");
        assert_eq!(storage_root(), expected);
        unsafe { std::env::remove_var("STORAGE_ROOT") };
    }

    #[test]
    #[serial]
    fn root_uses_absolute_as_is() {
        let td = TempDir::new().unwrap();
        let abs = td.path().to_path_buf();
        unsafe { std::env::set_var("STORAGE_ROOT", &abs) };
        assert_eq!(storage_root(), abs);
        assert_eq!(
            exercise_dir("1", "variables"),
            abs.join("unit_1").join("exercise_variables")
        );
        unsafe { std::env::remove_var("STORAGE_ROOT") };
    }

    #[test]
    fn helpers_construct_expected_paths() {
        let root = PathBuf::from("/data");
        let base = root.join("unit_2").join("exercise_bucles");
        assert_eq!(exercise_dir_in(&root, "2", "bucles"), base);
        assert_eq!(config_path_in(&root, "2", "bucles"), base.join("config.json"));
        assert_eq!(rubric_path_in(&root, "2", "bucles"), base.join("rubric.json"));
        assert_eq!(
            solution_path_in(&root, "2", "bucles", "solution.c"),
            base.join("solution.c")
        );
    }
}
