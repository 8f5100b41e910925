mod command;
mod query;

pub use self::command::CommentCommandService;
pub use self::query::CommentQueryService;
