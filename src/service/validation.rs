//! Request validation for book payloads.

use crate::error::AppError;
use crate::model::{BookPayload, NewBook};

pub struct RequestValidator;

impl RequestValidator {
    /// Title and author must be present and non-blank. Optional fields pass through;
    /// a missing description becomes the empty string.
    pub fn validate(payload: BookPayload) -> Result<NewBook, AppError> {
        let title = required(payload.title);
        let author = required(payload.author);
        let (Some(title), Some(author)) = (title, author) else {
            return Err(AppError::Validation("Title and author are required".into()));
        };
        Ok(NewBook {
            title,
            author,
            description: payload.description.unwrap_or_default(),
            publication_year: payload.publication_year,
            isbn: payload.isbn,
        })
    }
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
