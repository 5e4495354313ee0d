//! Dependency evaluation and the result document.
//!
//! [`DependencyChecker`] walks the plugins selected by a
//! [`Scope`](crate::scope::Scope), loads each manifest and evaluates every
//! declared edge into a [`DependencyResult`]. Results land in one of four
//! buckets of a [`CheckResult`]; the bucket depends only on which manifest
//! map declared the edge.

pub mod evaluator;
pub mod result;

pub use evaluator::DependencyChecker;
pub use result::{CheckResult, DependencyResult};
