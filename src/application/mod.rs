//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls, validation, and business rules
//! on top of the domain traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::account_service::AccountService`] - Registration and login
//! - [`services::auth_service::AuthService`] - Session token authentication
//! - [`services::link_service::LinkService`] - Link CRUD and redirect resolution

pub mod services;
