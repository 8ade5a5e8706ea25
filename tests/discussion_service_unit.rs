// tests/discussion_service_unit.rs
use std::sync::Arc;

use marginalia::application::commands::discussion::{
    AddCommentCommand, AddReplyCommand, DeleteCommentCommand, DeleteReplyCommand,
    DiscussionCommandService, ToggleCommentLikeCommand,
};
use marginalia::application::error::ApplicationError;
use marginalia::domain::article::{ArticleSlug, ArticleStore};
use marginalia::infrastructure::store::{InMemoryArticleStore, seed};

mod support;

use support::mocks::{ids::SequentialIds, time::FixedClock};

async fn make_service() -> (DiscussionCommandService, Arc<dyn ArticleStore>) {
    let store: Arc<dyn ArticleStore> = Arc::new(InMemoryArticleStore::new());
    seed::seed_sample_articles(store.as_ref())
        .await
        .expect("seed sample articles");

    let service = DiscussionCommandService::new(
        Arc::clone(&store),
        Arc::new(SequentialIds::default()),
        Arc::new(FixedClock),
    );
    (service, store)
}

#[tokio::test]
async fn add_comment_uses_generator_and_clock() {
    let (service, _) = make_service().await;

    let dto = service
        .add_comment(AddCommentCommand {
            slug: "gen-z-rise".into(),
            user_id: "userX".into(),
            content: "Nice!".into(),
        })
        .await
        .unwrap();

    assert_eq!(dto.comment_id, "c0000000000");
    assert_eq!(dto.created_at, support::mocks::time::fixed_now());
    assert!(dto.likes.is_empty());
    assert!(dto.replies.is_empty());
}

#[tokio::test]
async fn add_comment_touches_updated_at() {
    let (service, store) = make_service().await;

    service
        .add_comment(AddCommentCommand {
            slug: "gen-z-rise".into(),
            user_id: "userX".into(),
            content: "Nice!".into(),
        })
        .await
        .unwrap();

    let slug = ArticleSlug::new("gen-z-rise").unwrap();
    let shared = store.find_by_slug(&slug).await.unwrap().unwrap();
    let article = shared.read().await;
    assert_eq!(article.updated_at, support::mocks::time::fixed_now());
    assert_eq!(article.comments.len(), 2);
}

#[tokio::test]
async fn empty_content_is_a_validation_error_and_mutates_nothing() {
    let (service, store) = make_service().await;

    let err = service
        .add_comment(AddCommentCommand {
            slug: "gen-z-rise".into(),
            user_id: "userX".into(),
            content: "   ".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));

    let slug = ArticleSlug::new("gen-z-rise").unwrap();
    let shared = store.find_by_slug(&slug).await.unwrap().unwrap();
    let article = shared.read().await;
    assert_eq!(article.comments.len(), 1);
    assert_ne!(article.updated_at, support::mocks::time::fixed_now());
}

#[tokio::test]
async fn unknown_article_is_not_found() {
    let (service, _) = make_service().await;

    let err = service
        .add_comment(AddCommentCommand {
            slug: "no-such-slug".into(),
            user_id: "userX".into(),
            content: "hello".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn unknown_article_outranks_empty_content() {
    let (service, _) = make_service().await;

    let err = service
        .add_comment(AddCommentCommand {
            slug: "no-such-slug".into(),
            user_id: "".into(),
            content: "".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn empty_requester_is_unauthorized() {
    let (service, _) = make_service().await;

    let err = service
        .delete_comment(DeleteCommentCommand {
            slug: "gen-z-rise".into(),
            comment_id: "c567890123".into(),
            requester: "".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized(_)));
}

#[tokio::test]
async fn non_author_delete_is_forbidden() {
    let (service, _) = make_service().await;

    let err = service
        .delete_comment(DeleteCommentCommand {
            slug: "gen-z-rise".into(),
            comment_id: "c567890123".into(),
            requester: "intruder".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn toggle_like_reports_action_and_count() {
    let (service, _) = make_service().await;

    // seeded likes: user112, user888
    let unliked = service
        .toggle_comment_like(ToggleCommentLikeCommand {
            slug: "gen-z-rise".into(),
            comment_id: "c567890123".into(),
            user_id: "user888".into(),
        })
        .await
        .unwrap();
    assert_eq!(unliked.action, "unliked");
    assert_eq!(unliked.likes, vec!["user112".to_string()]);
    assert_eq!(unliked.count, 1);

    let liked = service
        .toggle_comment_like(ToggleCommentLikeCommand {
            slug: "gen-z-rise".into(),
            comment_id: "c567890123".into(),
            user_id: "user888".into(),
        })
        .await
        .unwrap();
    assert_eq!(liked.action, "liked");
    assert_eq!(liked.count, 2);
}

#[tokio::test]
async fn add_then_delete_reply_restores_prior_state() {
    let (service, store) = make_service().await;

    let reply = service
        .add_reply(AddReplyCommand {
            slug: "gen-z-rise".into(),
            comment_id: "c567890123".into(),
            user_id: "user456".into(),
            content: "Same here.".into(),
        })
        .await
        .unwrap();
    assert!(reply.reply_id.starts_with('r'));

    service
        .delete_reply(DeleteReplyCommand {
            slug: "gen-z-rise".into(),
            comment_id: "c567890123".into(),
            reply_id: reply.reply_id.clone(),
            requester: "user456".into(),
        })
        .await
        .unwrap();

    let slug = ArticleSlug::new("gen-z-rise").unwrap();
    let shared = store.find_by_slug(&slug).await.unwrap().unwrap();
    let article = shared.read().await;
    assert!(article.comments[0].replies.is_empty());
}

#[tokio::test]
async fn reply_delete_reports_one_not_found_for_both_levels() {
    let (service, _) = make_service().await;

    let missing_reply = service
        .delete_reply(DeleteReplyCommand {
            slug: "gen-z-rise".into(),
            comment_id: "c567890123".into(),
            reply_id: "r-missing".into(),
            requester: "user111".into(),
        })
        .await
        .unwrap_err();
    let missing_comment = service
        .delete_reply(DeleteReplyCommand {
            slug: "gen-z-rise".into(),
            comment_id: "c-missing".into(),
            reply_id: "r-missing".into(),
            requester: "user111".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(missing_reply.to_string(), missing_comment.to_string());
    assert!(matches!(missing_comment, ApplicationError::NotFound(_)));
}
