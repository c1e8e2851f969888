//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations,
//! organized by concern: the read-mostly catalog hierarchy and the read-write
//! check ledger. Each repository borrows a connection, which may be a live
//! connection or an open transaction.

pub mod catalog;
pub mod ledger;
