//! Catalog repositories for the static retail hierarchy.
//!
//! Regions, networks, stores, and per-store nomenclature are seeded once by
//! import tooling and read-mostly thereafter. Lookup methods return empty
//! collections for unknown parents rather than erroring.

pub mod network;
pub mod nomenclature;
pub mod region;
pub mod store;
