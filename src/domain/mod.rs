//! Domain layer for lint diagnostics
//!
//! Pure value objects for violation reporting, independent of infrastructure
//! concerns like file systems or external reporters.

pub mod violations;

// Re-export main domain types for convenience
pub use violations::*;
