// src/application/ports/authors.rs
use crate::domain::article::UserId;

/// Resolves an author id to a display name for article summaries.
pub trait AuthorDirectory: Send + Sync {
    fn display_name(&self, author_id: &UserId) -> Option<String>;
}
