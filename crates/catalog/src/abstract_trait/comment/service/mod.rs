mod command;
mod query;

pub use self::command::{CommentCommandServiceTrait, DynCommentCommandService};
pub use self::query::{CommentQueryServiceTrait, DynCommentQueryService};
