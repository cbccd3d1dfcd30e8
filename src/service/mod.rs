//! Book operations and request validation.

mod crud;
mod validation;
pub use crud::BookService;
pub use validation::RequestValidator;
