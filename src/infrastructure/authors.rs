use crate::application::ports::authors::AuthorDirectory;
use crate::domain::article::UserId;
use std::collections::HashMap;

/// Fixed author-id to display-name map standing in for a user service.
#[derive(Default)]
pub struct StaticAuthorDirectory {
    names: HashMap<String, String>,
}

impl StaticAuthorDirectory {
    pub fn new(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            names: entries.into_iter().collect(),
        }
    }

    pub fn with_sample_authors() -> Self {
        Self::new(
            [
                ("84b2f82c-1e93-498a-983e-3b30a8379e63", "Samuel Green"),
                ("user_002", "Alex Martinez"),
                ("kristen-lee-id", "Kristen Lee"),
                ("alex-wen-id", "Alex Wen"),
                ("hannah-cole-id", "Hannah Cole"),
                ("urban-planner-id", "Jordan Urban"),
                ("quote-author-id", "John Shedd"),
            ]
            .map(|(id, name)| (id.to_string(), name.to_string())),
        )
    }
}

impl AuthorDirectory for StaticAuthorDirectory {
    fn display_name(&self, author_id: &UserId) -> Option<String> {
        self.names.get(author_id.as_str()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_author_resolves_unknown_does_not() {
        let directory = StaticAuthorDirectory::with_sample_authors();
        let known = UserId::new("user_002").unwrap();
        let unknown = UserId::new("nobody").unwrap();
        assert_eq!(directory.display_name(&known).as_deref(), Some("Alex Martinez"));
        assert!(directory.display_name(&unknown).is_none());
    }
}
