//! Link creation, retrieval, and redirect resolution.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_normalizer::normalize_destination;

/// Maximum short-code generation attempts before giving up.
const MAX_CODE_ATTEMPTS: usize = 5;

/// Service for owner-scoped link management and the redirect hot path.
pub struct LinkService<L: LinkRepository> {
    links: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(links: Arc<L>) -> Self {
        Self { links }
    }

    /// Creates a short link for an owner.
    ///
    /// The URL is normalized to carry an explicit scheme before storage.
    /// The short code is random; uniqueness is the store's constraint, so
    /// the insert is attempted and retried with a fresh code when the
    /// store reports a collision. A collision never surfaces to the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an unusable URL,
    /// [`AppError::Internal`] if code generation keeps colliding or on
    /// database errors.
    pub async fn create_link(&self, original_url: &str, owner_id: i64) -> Result<Link, AppError> {
        let normalized_url = normalize_destination(original_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let new_link = NewLink {
                original_url: normalized_url.clone(),
                short_code: generate_code(),
                user_id: owner_id,
            };

            match self.links.create(new_link).await {
                Ok(link) => {
                    tracing::info!(link_id = link.id, code = %link.short_code, "link created");
                    return Ok(link);
                }
                Err(AppError::Conflict { .. }) => {
                    tracing::warn!(attempt, "short code collision, regenerating");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique short code",
            json!({ "attempts": MAX_CODE_ATTEMPTS }),
        ))
    }

    /// Resolves a short code to its destination URL, counting the click.
    ///
    /// The sequence is fixed: lookup, increment, normalize, validate.
    /// The increment happens before destination checks because the
    /// counter models attempted resolutions; a stored URL that fails to
    /// parse still counts a click.
    ///
    /// The caller issues the actual HTTP redirect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code (no increment
    /// happens), [`AppError::InvalidDestination`] when the stored URL
    /// cannot be normalized into something parseable.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let link = self.links.find_by_code(code).await?.ok_or_else(|| {
            AppError::not_found("Short link not found", json!({ "code": code }))
        })?;

        if !self.links.increment_clicks(code).await? {
            // Row vanished between lookup and increment; the redirect
            // still proceeds, there is just nothing left to count.
            tracing::warn!(code, "click increment matched no row");
        }

        let destination = normalize_destination(&link.original_url).map_err(|e| {
            AppError::invalid_destination(
                "Stored destination is not resolvable",
                json!({ "reason": e.to_string() }),
            )
        })?;

        Ok(destination)
    }

    /// Lists all links belonging to an owner, newest first.
    pub async fn list_links(&self, owner_id: i64) -> Result<Vec<Link>, AppError> {
        self.links.list_by_owner(owner_id).await
    }

    /// Retrieves a single link by id, scoped to its owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the id is unknown or the link
    /// belongs to someone else; the two cases are indistinguishable.
    pub async fn get_link(&self, id: i64, owner_id: i64) -> Result<Link, AppError> {
        self.links
            .find_by_id_for_owner(id, owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "id": id })))
    }

    /// Deletes a link by id, scoped to its owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the id is unknown or the link
    /// belongs to someone else.
    pub async fn delete_link(&self, id: i64, owner_id: i64) -> Result<(), AppError> {
        let deleted = self.links.delete_for_owner(id, owner_id).await?;

        if !deleted {
            return Err(AppError::not_found("Link not found", json!({ "id": id })));
        }

        tracing::info!(link_id = id, "link deleted");
        Ok(())
    }
}
