//! # Rubrics
//!
//! The two implementations of [`crate::traits::rubric::Rubric`]:
//!
//! - [`generated_rubric`]: criteria derived from the reference solution's
//!   declarations, assignments, conditionals and loops.
//! - [`fixed_rubric`]: criteria written by an exercise author as labelled
//!   regex rules.

pub mod fixed_rubric;
pub mod generated_rubric;
