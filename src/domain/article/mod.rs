pub mod discussion;
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use discussion::{Comment, LikeToggle, Reply};
pub use entity::{Article, Paragraph, ParagraphNote};
pub use repository::{ArticleStore, SharedArticle};
pub use value_objects::{
    ArticleSlug, ArticleTitle, CommentBody, CommentId, LikeAction, LikeSet, ReplyId, UserId,
};
