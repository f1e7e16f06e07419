//! Web layer for the trip planner.
//!
//! Provides HTTP endpoints for listing cities and planning routes.

mod config;
mod dto;
mod routes;
mod state;

pub use config::{ConfigError, NetworkKind, ServerConfig};
pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
