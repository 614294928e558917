//! Domain types and the setup orchestrator for the Suitable backend.
//!
//! Everything in this crate is free of database access; the PostgreSQL
//! implementations of the setup capabilities live in `suitable-db` and the
//! `suitable-setup` binary.

pub mod error;
pub mod roles;
pub mod setup;
pub mod types;
