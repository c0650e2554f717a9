//! # Utilities
//!
//! Helpers shared by several pipeline stages.
//!
//! - [`normalization`]: canonical form of source code used for comparison and rubric matching.

pub mod normalization;
