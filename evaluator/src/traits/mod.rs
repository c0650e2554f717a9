//!
//! Traits Module
//!
//! Seams of the evaluation pipeline. Each stage is a trait so alternative
//! strategies can be plugged into [`crate::EvaluationJob`].
//!
//! - [`comparator`]: aligning a submission with the reference solution.
//! - [`feedback`]: turning scores into student-facing messages.
//! - [`rubric`]: the two rubric flavours (generated and author-supplied).
//! - [`validator`]: per-language syntax validation.

pub mod comparator;
pub mod feedback;
pub mod rubric;
pub mod validator;
