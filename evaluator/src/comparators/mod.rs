//! # Comparators
//!
//! Strategies for aligning a normalized submission with the normalized
//! reference solution. Every comparator implements
//! [`crate::traits::comparator::CodeComparator`].
//!
//! - [`positional_comparator`]: strict position-by-position line equality.

pub mod positional_comparator;
