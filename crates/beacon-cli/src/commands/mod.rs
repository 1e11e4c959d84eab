pub mod add;
pub mod delete;
pub mod dispatch;
pub mod list;
pub mod search;
pub mod shell;
