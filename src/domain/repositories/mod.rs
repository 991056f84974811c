//! Repository trait definitions for the domain layer.
//!
//! Traits define the data-access contracts; concrete implementations live
//! in `crate::infrastructure::persistence`, and mock implementations are
//! auto-generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Account lookup and registration insert
//! - [`LinkRepository`] - Link CRUD and atomic click accounting

pub mod link_repository;
pub mod user_repository;

pub use link_repository::LinkRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
