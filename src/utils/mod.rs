//! Utility modules shared across the application:
//!
//! - [`code_generator`] - Short code generation
//! - [`url_normalizer`] - Destination URL normalization
//! - [`validators`] - Password and email policies
//! - [`password`] - Argon2id password hashing
//! - [`token_codec`] - Session token signing and verification

pub mod code_generator;
pub mod password;
pub mod token_codec;
pub mod url_normalizer;
pub mod validators;
