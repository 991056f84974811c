//! Core domain entities.
//!
//! Plain data structures without business logic:
//!
//! - [`User`] - A registered account
//! - [`Link`] - A shortened URL mapping
//! - [`NewLink`] - Creation input for a link

pub mod link;
pub mod user;

pub use link::{Link, NewLink};
pub use user::User;
