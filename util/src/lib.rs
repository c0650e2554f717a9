pub mod exercise_config;
pub mod fixed_rubric;
pub mod languages;
pub mod paths;
pub mod test_helpers;
