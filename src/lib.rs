//! Lint Diagnostics - violation records for static-analysis report pipelines
//!
//! Architecture: this crate is the leaf data type of a lint tool's reporting
//! pipeline. The analysis engine constructs [`ViolationRecord`] values, an
//! external reporter collects them, sorts them with [`sort_for_report`], and
//! writes each record's canonical [`std::fmt::Display`] rendering.
//!
//! Records are immutable values with no owned resources; they can be shared
//! freely across analysis workers without synchronization. Every operation
//! here is total: construction, comparison, equality, and rendering cannot
//! fail for any input.

pub mod domain;

// Re-export main types for convenient access
pub use domain::violations::{sort_for_report, Severity, ViolationRecord, EMPTY};
