//! Statement text and LIKE pattern construction.

/// Column list shared across queries.
pub const COLUMNS: &str =
    "id, title, author, description, publication_year, isbn, created_at, updated_at";

pub fn select_all() -> String {
    format!("SELECT {COLUMNS} FROM books ORDER BY created_at DESC")
}

/// Caller binds the pattern from [`contains_pattern`] as `$1`.
pub fn select_matching() -> String {
    format!(
        "SELECT {COLUMNS} FROM books \
         WHERE title ILIKE $1 OR author ILIKE $1 \
         ORDER BY created_at DESC"
    )
}

pub fn insert() -> String {
    format!(
        "INSERT INTO books (title, author, description, publication_year, isbn) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING {COLUMNS}"
    )
}

/// `$1` is the id, `$2..$6` the replacement fields.
pub fn update() -> String {
    format!(
        "UPDATE books SET \
         title = $2, author = $3, description = $4, publication_year = $5, isbn = $6, \
         updated_at = NOW() \
         WHERE id = $1 \
         RETURNING {COLUMNS}"
    )
}

pub fn delete() -> &'static str {
    "DELETE FROM books WHERE id = $1"
}

/// Wrap `needle` in `%...%` so ILIKE matches it as a literal substring.
/// `\`, `%` and `_` are escaped with PostgreSQL's default LIKE escape character.
pub fn contains_pattern(needle: &str) -> String {
    let mut out = String::with_capacity(needle.len() + 2);
    out.push('%');
    for ch in needle.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('%');
    out
}
