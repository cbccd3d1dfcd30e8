//! Request extractors that reject with [`crate::error::AppError`] or not at all.

mod book_id;
mod payload;
mod search;
pub use book_id::BookId;
pub use payload::JsonPayload;
pub use search::SearchTerm;
