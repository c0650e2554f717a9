use serial_test::serial;
use services::exercise_repository::{ExerciseRepository, FileExerciseRepository};
use util::exercise_config::ExerciseConfig;
use util::languages::Language;
use util::test_helpers::{create_test_exercise, setup_test_storage_root};

#[test]
#[serial]
fn repository_from_env_uses_storage_root() {
    let tmp = setup_test_storage_root();
    create_test_exercise(
        "2",
        "bucles",
        &ExerciseConfig::default(),
        Some(("solution.c", "int i = 0;")),
    );

    let repo = FileExerciseRepository::from_env();
    assert!(repo.root().starts_with(tmp.path().canonicalize().unwrap()));
    assert_eq!(repo.solution("2", "bucles").unwrap(), "int i = 0;");
}

#[test]
#[serial]
fn stored_language_hint_is_read_from_env_root() {
    let _tmp = setup_test_storage_root();
    let config = ExerciseConfig {
        language: Some(Language::PSeInt),
        ..ExerciseConfig::default()
    };
    create_test_exercise(
        "2",
        "mientras",
        &config,
        Some(("solution.psc", "Definir i Como Entero")),
    );

    let repo = FileExerciseRepository::from_env();
    assert_eq!(repo.config("2", "mientras").unwrap().language, Some(Language::PSeInt));
    assert_eq!(repo.solution("2", "mientras").unwrap(), "Definir i Como Entero");
}
