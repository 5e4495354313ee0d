//! Human-readable views of a check result.
//!
//! Both views work from the JSON document alone, so they can be fed a
//! saved or piped result as well as a fresh one.

pub mod input;
pub mod resolution;
pub mod tables;

pub use input::{parse_document, read_document};
pub use resolution::{format_steps, generate_steps, has_required_issues, ResolutionStep, StepKind};
pub use tables::{render_check_result, MAX_TABLE_WIDTH};
