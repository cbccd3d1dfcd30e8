//! HTTP handlers for the book catalog.

pub mod book;
pub use book::*;
