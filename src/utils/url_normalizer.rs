//! Destination URL normalization.
//!
//! Stored and resolved URLs must carry an explicit scheme. Inputs without
//! one get `https://` prepended; anything that still fails to parse is
//! rejected.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Normalizes a destination URL for storage or redirect resolution.
///
/// # Rules
///
/// 1. `http://` and `https://` inputs pass through unchanged.
/// 2. Inputs with any other explicit scheme (`ftp://`, `javascript:` with
///    authority, ...) are rejected.
/// 3. Scheme-less inputs get `https://` prepended.
/// 4. The result must parse as a URL with a host.
///
/// The returned string preserves the caller's path and query exactly; no
/// re-serialization happens, so `go.dev` becomes `https://go.dev`, not
/// `https://go.dev/`.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] when the candidate
/// does not parse, [`UrlNormalizationError::UnsupportedProtocol`] for
/// non-HTTP(S) schemes.
pub fn normalize_destination(input: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlNormalizationError::InvalidFormat(
            "empty URL".to_string(),
        ));
    }

    let lower = trimmed.to_ascii_lowercase();
    let candidate = if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else if trimmed.contains("://") {
        return Err(UrlNormalizationError::UnsupportedProtocol);
    } else {
        format!("https://{trimmed}")
    };

    let url =
        Url::parse(&candidate).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    if url.host_str().is_none() {
        return Err(UrlNormalizationError::InvalidFormat(
            "URL has no host".to_string(),
        ));
    }

    Ok(candidate)
}
