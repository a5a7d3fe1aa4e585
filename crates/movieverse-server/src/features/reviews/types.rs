use chrono::{DateTime, Utc};
use movieverse_common::types::StarRating;
use serde::{Deserialize, Serialize};

use crate::backend::ReviewRow;

/// Author shown when neither the row nor the viewer supplies one.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// Review as rendered in the reviews list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub author: String,
    pub content: String,
    /// `None` renders as unrated.
    pub rating: Option<StarRating>,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn from_row(row: ReviewRow, viewer_email: Option<&str>) -> Self {
        let author = row
            .author
            .filter(|author| !author.trim().is_empty())
            .or_else(|| viewer_email.map(str::to_string))
            .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string());

        Self {
            id: row.id.to_string(),
            author,
            content: row.content,
            rating: row.rating.and_then(StarRating::from_stored),
            created_at: row.created_at,
        }
    }
}
