//! Well-known role name constants.
//!
//! These must match the seed rows in `20250901000001_create_roles_table.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_STAFF: &str = "staff";
pub const ROLE_MEMBER: &str = "member";
