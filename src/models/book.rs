//! Book model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Catalog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Assigned by the store, starting at 1 and never reused
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Whether the book has been read
    pub read: bool,
}

impl Book {
    pub(crate) fn from_payload(id: i64, payload: BookPayload) -> Self {
        Self {
            id,
            title: payload.title,
            author: payload.author,
            read: payload.read,
        }
    }
}

/// Create or replace book request
///
/// `title` and `author` default to empty strings when absent so that a
/// missing field is reported by validation rather than by the JSON decoder.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct BookPayload {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "title must not be empty"))]
    pub title: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "author must not be empty"))]
    pub author: String,
    #[serde(default)]
    pub read: bool,
}

impl BookPayload {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            read: false,
        }
    }

    pub fn with_read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }
}

/// Read status update request
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ReadStatusPayload {
    pub read: bool,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
