//! Web layer for the platform assistant.
//!
//! JSON endpoints for browsing lines and stations, leaving feedback, and
//! requesting live status advisories.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
