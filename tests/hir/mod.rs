//! HIR layer tests
//!
//! Tests for the symbol graph built from Python sources:
//! - Symbol extraction over realistic fixtures
//! - Graph invariants (containment, ordering, idempotence)
//! - Diagnostics next to best-effort graphs
//! - Batch analysis of a source tree
//! - JSON export

pub mod tests_batch;
pub mod tests_export;
pub mod tests_properties;
pub mod tests_symbol_extraction;
