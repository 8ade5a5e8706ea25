mod add_comment;
mod add_reply;
mod delete_comment;
mod delete_reply;
mod like_comment;
mod like_reply;
mod service;

pub use add_comment::AddCommentCommand;
pub use add_reply::AddReplyCommand;
pub use delete_comment::DeleteCommentCommand;
pub use delete_reply::DeleteReplyCommand;
pub use like_comment::ToggleCommentLikeCommand;
pub use like_reply::ToggleReplyLikeCommand;
pub use service::DiscussionCommandService;
