//! `suitable-setup` library crate.
//!
//! Holds the configuration loader, password hashing, and the PostgreSQL
//! implementations of the setup capabilities. The binary entrypoint lives
//! in `main.rs`.

pub mod config;
pub mod password;
pub mod services;
