//! Parameterized statements for the `books` table. Values are always bound, never interpolated.

mod builder;
pub use builder::*;
