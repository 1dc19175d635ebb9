//! Task Board Server
//!
//! # Architecture overview
//!
//! - **HTTP API** (`api`): RESTful board/task/tag resources plus the chat bridge
//! - **Database** (`db`): embedded SQLite store with FK integrity and migrations
//! - **Services** (`services`): outbound generative API bridge
//! - **Core** (`core`): configuration, state, server lifecycle
//!
//! # Module structure
//!
//! ```text
//! board-server/src/
//! ├── core/          # Config, ServerState, Server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Pool setup, migrations, repositories
//! ├── services/      # Assistant bridge
//! └── utils/         # Errors, results, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use crate::core::server::{app, build_app};
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging; call once at process start.
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    utils::logger::init_logger_with_file(level.as_deref(), log_dir.as_deref());
}
