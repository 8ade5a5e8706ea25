use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleSummaryDto, ParagraphDto},
        error::ApplicationResult,
    },
    domain::article::Article,
};

const EXCERPT_MAX_CHARS: usize = 150;

impl ArticleQueryService {
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        let mut summaries = Vec::new();
        for shared in self.store.list().await? {
            let article = shared.read().await;
            summaries.push(self.summarize(&article));
        }
        Ok(summaries)
    }

    fn summarize(&self, article: &Article) -> ArticleSummaryDto {
        let author_name = self
            .authors
            .display_name(&article.author_id)
            .unwrap_or_else(|| "Unknown Author".to_string());
        let excerpt = article
            .content
            .first()
            .map(|p| excerpt_of(&p.text))
            .unwrap_or_default();

        ArticleSummaryDto {
            title: article.title.as_str().to_string(),
            slug: article.slug.as_str().to_string(),
            cover_image_url: article.cover_image_url.clone(),
            tags: article.tags.clone(),
            author_id: article.author_id.as_str().to_string(),
            author_name,
            content: article.content.iter().map(ParagraphDto::from).collect(),
            excerpt,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

fn excerpt_of(text: &str) -> String {
    if text.chars().count() <= EXCERPT_MAX_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(EXCERPT_MAX_CHARS).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::{EXCERPT_MAX_CHARS, excerpt_of};

    #[test]
    fn short_text_passes_through() {
        assert_eq!(excerpt_of("short"), "short");
    }

    #[test]
    fn long_text_is_truncated_with_ellipsis() {
        let text = "x".repeat(EXCERPT_MAX_CHARS + 20);
        let excerpt = excerpt_of(&text);
        assert!(excerpt.ends_with("..."));
        assert_eq!(excerpt.chars().count(), EXCERPT_MAX_CHARS + 3);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let text = "é".repeat(EXCERPT_MAX_CHARS + 1);
        let excerpt = excerpt_of(&text);
        assert!(excerpt.starts_with('é'));
        assert!(excerpt.ends_with("..."));
    }
}
