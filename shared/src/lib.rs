//! Shared models and utilities for the task board service.
//!
//! Consumed by the server and by API clients. Database derives are gated
//! behind the `db` feature so wire-only consumers stay dependency-light.

pub mod models;
pub mod util;
