mod command;
mod query;

pub use self::command::{CommentCommandRepositoryTrait, DynCommentCommandRepository};
pub use self::query::{CommentQueryRepositoryTrait, DynCommentQueryRepository};
