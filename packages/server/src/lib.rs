//! Real-time subsystem of the Madoguchi municipal complaint portal.
//!
//! Citizens and staff hold persistent WebSocket connections through which
//! direct messages are relayed, typing indicators forwarded, and complaint
//! like/comment updates broadcast. Everything else the portal does (forms,
//! uploads, dashboards) is ordinary request/response CRUD handled elsewhere.

pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use ui::runner::{build_router, build_state, run_server};
pub use ui::state::AppState;
