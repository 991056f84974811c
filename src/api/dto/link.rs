//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request body for `POST /api/links`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The destination URL. A missing scheme defaults to `https://`.
    #[validate(length(min = 1, max = 2048, message = "URL must be 1-2048 characters"))]
    pub url: String,
}

/// JSON representation of a link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub clicks_count: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            short_code: link.short_code,
            original_url: link.original_url,
            clicks_count: link.clicks_count,
            created_at: link.created_at,
        }
    }
}

/// Response for `GET /api/links`: the owner's links plus dashboard-style
/// aggregates.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub total_links: usize,
    pub total_clicks: i64,
    pub links: Vec<LinkResponse>,
}

impl LinkListResponse {
    pub fn from_links(links: Vec<Link>) -> Self {
        let total_links = links.len();
        let total_clicks = links.iter().map(|l| l.clicks_count).sum();

        Self {
            total_links,
            total_clicks,
            links: links.into_iter().map(LinkResponse::from).collect(),
        }
    }
}
