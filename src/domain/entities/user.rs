//! User entity representing a registered account.

use chrono::{DateTime, Utc};

/// A registered account.
///
/// Created once at registration and immutable afterwards. The
/// `password_hash` is an opaque PHC string and is never reversed.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
