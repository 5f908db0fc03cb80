//! Core domain model for lint violations
//!
//! Architecture: Rich Domain Models - a violation is an immutable value object
//! - Records carry location, severity, and message; nothing here performs I/O
//! - Two independent relations live on the type: structural equality (all five
//!   fields, consistent with `Hash`) and reading-order comparison (line, then
//!   column). The second is coarser than the first, so `Ord` is deliberately
//!   not implemented.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Severity levels for lint violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Warnings that should be addressed but don't block builds
    Warning,
    /// Errors that fail the lint run
    Error,
}

impl Severity {
    /// Lowercase form used by the canonical rendering
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A single rule violation found while analyzing a source file
///
/// Equality and hashing are structural over all five fields. Reading-order
/// comparison is [`ViolationRecord::cmp_by_position`], which looks at line and
/// column only; two records at the same position compare equal under it even
/// when they differ in path, severity, or message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViolationRecord {
    /// Path of the analyzed source file
    pub path: String,
    /// Line number (1-indexed; 0 means "no location")
    pub line: i32,
    /// Column number (1-indexed; 0 means "no location")
    pub column: i32,
    /// Severity level of this violation
    pub severity: Severity,
    /// Human-readable description of the violated rule
    pub message: String,
}

lazy_static! {
    /// Placeholder record representing "no violation"; renders as the empty string.
    pub static ref EMPTY: ViolationRecord =
        ViolationRecord::new("", 0, 0, Severity::Warning, "");
}

impl ViolationRecord {
    /// Create a new violation record
    ///
    /// Accepts the given values as-is; the analysis engine owns validation.
    /// Non-positive line or column numbers are kept and treated as ordinary
    /// comparison keys.
    pub fn new(
        path: impl Into<String>,
        line: i32,
        column: i32,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            line,
            column,
            severity,
            message: message.into(),
        }
    }

    /// Whether this record is the [`struct@EMPTY`] sentinel
    pub fn is_empty(&self) -> bool {
        *self == *EMPTY
    }

    /// Reading-order comparison: line ascending, then column ascending
    ///
    /// Severity, message, and path are not part of the key; callers sorting a
    /// multi-file report must group by path before sorting. This relation is
    /// coarser than `==`, so it is a named method rather than an `Ord` impl.
    pub fn cmp_by_position(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl fmt::Display for ViolationRecord {
    /// Canonical rendering: `<path>:<line>:<column>: <severity>: <message>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(
            f,
            "{}:{}:{}: {}: {}",
            self.path,
            self.line,
            self.column,
            self.severity.as_str(),
            self.message
        )
    }
}

/// Sort violations into reading order for consistent report output
///
/// `sort_by` is stable, so records at the same position keep their discovery
/// order.
pub fn sort_for_report(records: &mut [ViolationRecord]) {
    records.sort_by(|a, b| a.cmp_by_position(b));
}
