//! GitHub types.

mod issue_comment;
mod user;

pub use issue_comment::GhIssueComment;
pub use user::GhUser;
