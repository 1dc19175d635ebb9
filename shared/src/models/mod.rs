//! Data models
//!
//! Shared between board-server and frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are TEXT (uuid v4, or client-supplied for tags).

pub mod board;
pub mod chat;
pub mod comment;
pub mod tag;
pub mod task;

// Re-exports
pub use board::{Board, BoardCreate, BoardUpdate, BoardWithTasks};
pub use chat::{ChatMessage, ChatReply, ChatRequest, ChatRole};
pub use comment::Comment;
pub use tag::{DEFAULT_TAG_COLOR, Tag, TagInput};
pub use task::{Task, TaskCreate, TaskDetail, TaskPriority, TaskStatus, TaskUpdate};
