use crate::domain::article::{Article, Paragraph, ParagraphNote};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::discussion::CommentDto;
use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphNoteDto {
    pub user_id: String,
    pub content: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<&ParagraphNote> for ParagraphNoteDto {
    fn from(note: &ParagraphNote) -> Self {
        Self {
            user_id: note.user_id.as_str().to_string(),
            content: note.content.clone(),
            created_at: note.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphDto {
    pub paragraph_id: String,
    pub text: String,
    pub likes: Vec<String>,
    pub comments: Vec<ParagraphNoteDto>,
}

impl From<&Paragraph> for ParagraphDto {
    fn from(paragraph: &Paragraph) -> Self {
        Self {
            paragraph_id: paragraph.id.clone(),
            text: paragraph.text.clone(),
            likes: paragraph
                .likes
                .as_slice()
                .iter()
                .map(|u| u.as_str().to_string())
                .collect(),
            comments: paragraph.notes.iter().map(ParagraphNoteDto::from).collect(),
        }
    }
}

/// Full article view, comment tree included.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub slug: String,
    pub author_id: String,
    pub title: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    pub content: Vec<ParagraphDto>,
    pub likes: Vec<String>,
    pub view_count: u64,
    pub comments: Vec<CommentDto>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<&Article> for ArticleDto {
    fn from(article: &Article) -> Self {
        Self {
            slug: article.slug.as_str().to_string(),
            author_id: article.author_id.as_str().to_string(),
            title: article.title.as_str().to_string(),
            tags: article.tags.clone(),
            cover_image_url: article.cover_image_url.clone(),
            content: article.content.iter().map(ParagraphDto::from).collect(),
            likes: article
                .likes
                .as_slice()
                .iter()
                .map(|u| u.as_str().to_string())
                .collect(),
            view_count: article.view_count,
            comments: article.comments.iter().map(CommentDto::from).collect(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Listing entry: the article body plus a short excerpt, no comment tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummaryDto {
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    pub tags: Vec<String>,
    pub author_id: String,
    pub author_name: String,
    pub content: Vec<ParagraphDto>,
    pub excerpt: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}
