//! Short code generation.
//!
//! Codes are drawn from the 62-symbol alphanumeric alphabet with a
//! cryptographically secure generator so codes cannot be enumerated.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated short codes.
///
/// Six symbols over a 62-character alphabet give ~5.7e10 combinations.
/// Collisions are unlikely but possible, so callers must retry creation
/// when the store reports a short-code conflict.
pub const CODE_LENGTH: usize = 6;

/// Generates a random short code of [`CODE_LENGTH`] alphanumeric symbols.
///
/// `rand::rng()` is a CSPRNG, which matters here: a predictable sequence
/// would let an attacker walk other users' links.
///
/// The generator itself carries no uniqueness guarantee; uniqueness is
/// enforced by the store's constraint at insert time.
pub fn generate_code() -> String {
    generate_code_with_length(CODE_LENGTH)
}

/// Generates a random alphanumeric code of the given length.
pub fn generate_code_with_length(length: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
