//! collate-core
//!
//! Registry contract and temporal join engine for reconstructing the
//! instrument configurations recorded at a site.
//!
//! - `registry`: the read-only `Registry` trait over all metadata tables.
//! - `associations`: gathers the gains and calibrations overlapping a span.
//! - `lookup`: candidate lookup, either scanning tables or via a per-join index.
//! - `builder`: the two-path join (direct recorders and connections).
//! - `ordering`: the canonical total order over collections.
//!
//! The engine is synchronous and pure. It reads an immutable registry and
//! returns fresh, owned `Collection`s, so separate sites may be joined
//! concurrently as long as the registry is not mutated during the reads.
#![warn(missing_docs)]

/// Gain and calibration collection for a joined span.
pub mod associations;
pub mod builder;
/// Candidate lookup strategies over registry tables.
pub mod lookup;
/// Canonical collection ordering.
pub mod ordering;
/// The `Registry` trait implemented by metadata sources.
pub mod registry;
pub mod types;

pub use associations::collect_overlapping;
pub use builder::{build_collections, build_collections_with};
pub use ordering::{compare_collections, precedes, sort_collections};
pub use registry::Registry;
pub use types::*;
