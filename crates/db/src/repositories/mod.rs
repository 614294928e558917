//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` (or an open transaction) as the first argument.

pub mod category_repo;
pub mod event_repo;
pub mod role_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use event_repo::EventRepo;
pub use role_repo::RoleRepo;
pub use user_repo::UserRepo;
