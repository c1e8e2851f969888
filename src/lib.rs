//! Core for tracking periodic in-store product availability and price checks
//! across a retail chain hierarchy (region, network, store, product).
//!
//! The crate exposes four surfaces:
//! - a read-only catalog of regions, networks, stores, and per-store product
//!   nomenclature ([`data::catalog`]),
//! - a check ledger recording per-product presence and price captures per
//!   store and date ([`data::ledger`]),
//! - report builders that join the ledger with the catalog into tabular CSV
//!   exports ([`report`]),
//! - an overview façade annotating stores with their check status for a date
//!   ([`overview`]).
//!
//! HTTP routing, request validation, and report delivery belong to the
//! presentation layer consuming this crate.

pub mod data;
pub mod db;
pub mod error;
pub mod overview;
pub mod report;
pub mod util;

pub use error::Error;
