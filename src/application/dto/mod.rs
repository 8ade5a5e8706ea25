pub mod articles;
pub mod discussion;
pub mod serde_time;

pub use articles::{ArticleDto, ArticleSummaryDto, ParagraphDto, ParagraphNoteDto};
pub use discussion::{CommentDto, LikeToggleDto, ReplyDto};
