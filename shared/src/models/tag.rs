//! Tag Model

use serde::{Deserialize, Serialize};

/// Swatch used when a client supplies no color
pub const DEFAULT_TAG_COLOR: &str = "#3B82F6";

/// Tag entity — a global label, attachable to many tasks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Tag {
    pub id: String,
    pub name: String,
    /// CSS hex color
    pub color: String,
}

/// Tag attachment payload (connect-or-create, keyed by id)
///
/// An existing id links the stored row as-is; only a missing id creates a
/// new row from `name`/`color`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagInput {
    pub id: Option<String>,
    pub name: String,
    pub color: Option<String>,
}
