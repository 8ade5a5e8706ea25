//! Sample articles loaded into the in-memory store at startup, mirroring the
//! data the frontend prototype ships with.
use crate::domain::article::{
    Article, ArticleSlug, ArticleStore, ArticleTitle, Comment, CommentBody, CommentId, LikeSet,
    Paragraph, ParagraphNote, Reply, ReplyId, UserId,
};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

pub async fn seed_sample_articles(store: &dyn ArticleStore) -> DomainResult<()> {
    for article in sample_articles()? {
        store.insert(article).await?;
    }
    Ok(())
}

pub fn sample_articles() -> DomainResult<Vec<Article>> {
    Ok(vec![
        future_of_ai()?,
        gen_z_rise()?,
        hidden_costs_of_urbanization()?,
    ])
}

fn future_of_ai() -> DomainResult<Article> {
    let reply = reply(
        "r987654321",
        "user456",
        "I completely agree! The section on ethics was particularly eye-opening.",
        "2025-04-09T16:15:00.000Z",
        &["user789"],
    )?;

    Ok(Article {
        slug: ArticleSlug::new("updated-first-article")?,
        author_id: UserId::new("84b2f82c-1e93-498a-983e-3b30a8379e63")?,
        title: ArticleTitle::new(
            "The Future of Artificial Intelligence: Transforming Our World",
        )?,
        tags: vec!["AI".into(), "Machine Learning".into()],
        cover_image_url: Some(
            "https://images.unsplash.com/photo-1677442136019-21780ecad995".into(),
        ),
        content: vec![Paragraph {
            id: "p1".into(),
            text: "Artificial Intelligence (AI) stands at the forefront of technological \
                   innovation, promising to revolutionize every aspect of our lives. From \
                   healthcare to transportation, education to entertainment, AI's influence \
                   continues to grow exponentially."
                .into(),
            likes: likes(&["user123", "user234", "user345"])?,
            notes: vec![ParagraphNote {
                user_id: UserId::new("user456")?,
                content: "This introduction really sets the stage for understanding AI's impact!"
                    .into(),
                created_at: ts("2025-04-09T12:05:00.000Z")?,
            }],
        }],
        likes: likes(&["user789", "user234", "user345", "user456", "user567"])?,
        view_count: 1520,
        comments: vec![
            comment(
                "c123456789",
                "user789",
                "This article changed my perspective on AI. Thank you for the comprehensive \
                 overview!",
                "2025-04-09T15:30:00.000Z",
                &["user123", "user456"],
                vec![reply],
            )?,
            comment(
                "c987654321",
                "user234",
                "I'd love to see a follow-up piece on AI regulation across different countries.",
                "2025-04-10T08:15:00.000Z",
                &[],
                Vec::new(),
            )?,
        ],
        created_at: ts("2025-04-09T12:00:00.000Z")?,
        updated_at: ts("2025-04-09T14:00:00.000Z")?,
    })
}

fn gen_z_rise() -> DomainResult<Article> {
    Ok(Article {
        slug: ArticleSlug::new("gen-z-rise")?,
        author_id: UserId::new("user_002")?,
        title: ArticleTitle::new("The Rise of Gen Z Creators")?,
        tags: vec!["Culture".into(), "Youth".into()],
        cover_image_url: Some(
            "https://images.unsplash.com/photo-1601908804492-7f3d9d42e1b3".into(),
        ),
        content: vec![Paragraph {
            id: "p1".into(),
            text: "Gen Z is redefining creativity in the age of social media, turning platforms \
                   like TikTok and YouTube into launching pads for innovative voices around the \
                   globe."
                .into(),
            likes: likes(&["user111", "user112"])?,
            notes: vec![ParagraphNote {
                user_id: UserId::new("user888")?,
                content: "Inspiring read!".into(),
                created_at: ts("2025-04-09T12:05:00.000Z")?,
            }],
        }],
        likes: likes(&["user001"])?,
        view_count: 98,
        comments: vec![comment(
            "c567890123",
            "user111",
            "As a Gen Z creator, I feel seen by this article.",
            "2025-04-10T14:20:00.000Z",
            &["user112", "user888"],
            Vec::new(),
        )?],
        created_at: ts("2025-04-10T12:00:00.000Z")?,
        updated_at: ts("2025-04-10T13:00:00.000Z")?,
    })
}

fn hidden_costs_of_urbanization() -> DomainResult<Article> {
    Ok(Article {
        slug: ArticleSlug::new("hidden-costs-of-urbanization")?,
        author_id: UserId::new("alex-wen-id")?,
        title: ArticleTitle::new("The Hidden Costs of Urbanization")?,
        tags: vec!["Urbanization".into(), "Society".into()],
        cover_image_url: Some(
            "https://images.unsplash.com/photo-1541051646-784cfc8a2c21".into(),
        ),
        content: vec![
            Paragraph {
                id: "p1".into(),
                text: "Cities grow at breakneck speed, but beneath the skylines lie rising \
                       living costs, environmental strain, and widening inequality. How do we \
                       balance prosperity with sustainability in our ever-expanding \
                       metropolises?"
                    .into(),
                likes: LikeSet::new(),
                notes: Vec::new(),
            },
            Paragraph {
                id: "p2".into(),
                text: "## The Housing Crisis".into(),
                likes: LikeSet::new(),
                notes: Vec::new(),
            },
            Paragraph {
                id: "p3".into(),
                text: "As urban populations swell, housing markets transform into battlegrounds \
                       of economic disparity. Property values in city centers skyrocket beyond \
                       the reach of average workers, creating sprawling commuter zones and \
                       fractured communities."
                    .into(),
                likes: LikeSet::new(),
                notes: Vec::new(),
            },
        ],
        likes: LikeSet::new(),
        view_count: 0,
        comments: vec![comment(
            "c135792468",
            "urban-planner-id",
            "As an urban planner, I see these issues daily. We need to prioritize inclusive \
             development that accounts for all socioeconomic groups.",
            "2025-04-12T10:45:00.000Z",
            &[],
            Vec::new(),
        )?],
        created_at: ts("2025-04-12T09:15:00.000Z")?,
        updated_at: ts("2025-04-12T09:15:00.000Z")?,
    })
}

fn comment(
    id: &str,
    author: &str,
    content: &str,
    at: &str,
    liked_by: &[&str],
    replies: Vec<Reply>,
) -> DomainResult<Comment> {
    Ok(Comment {
        id: CommentId::new(id),
        author_id: UserId::new(author)?,
        body: CommentBody::new(content)?,
        created_at: ts(at)?,
        likes: likes(liked_by)?,
        replies,
    })
}

fn reply(
    id: &str,
    author: &str,
    content: &str,
    at: &str,
    liked_by: &[&str],
) -> DomainResult<Reply> {
    Ok(Reply {
        id: ReplyId::new(id),
        author_id: UserId::new(author)?,
        body: CommentBody::new(content)?,
        created_at: ts(at)?,
        likes: likes(liked_by)?,
    })
}

fn likes(users: &[&str]) -> DomainResult<LikeSet> {
    let users = users
        .iter()
        .map(|raw| UserId::new(*raw))
        .collect::<DomainResult<Vec<_>>>()?;
    Ok(LikeSet::from_users(users))
}

fn ts(raw: &str) -> DomainResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| DomainError::Validation(format!("bad seed timestamp {raw}: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_articles_build_cleanly() {
        let articles = sample_articles().unwrap();
        assert_eq!(articles.len(), 3);
        for article in &articles {
            assert!(article.updated_at >= article.created_at);
        }
    }

    #[test]
    fn gen_z_rise_has_the_seeded_comment() {
        let articles = sample_articles().unwrap();
        let article = articles
            .iter()
            .find(|a| a.slug.as_str() == "gen-z-rise")
            .unwrap();
        assert_eq!(article.comments.len(), 1);
        assert_eq!(article.comments[0].id.as_str(), "c567890123");
        assert_eq!(article.comments[0].likes.len(), 2);
    }
}
