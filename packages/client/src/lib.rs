//! CLI client library for the complaint-portal real-time layer.

pub mod command;
pub mod error;
pub mod presence;
pub mod typing;

pub use command::{Command, CommandError};
pub use error::ClientError;
pub use presence::PresenceMirror;
pub use typing::{TYPING_IDLE_WINDOW, TypingTracker};
