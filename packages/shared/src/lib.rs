//! Shared building blocks for the Madoguchi real-time subsystem.
//!
//! This crate holds everything the server and the CLI client must agree on:
//! the WebSocket wire events, timestamp helpers, and logger setup.

pub mod event;
pub mod logger;
pub mod time;

pub use event::{ClientEvent, CommentPayload, LikeAction, PresenceStatus, ServerEvent};
pub use logger::setup_logger;
pub use time::{get_jst_timestamp, timestamp_to_jst_rfc3339};
