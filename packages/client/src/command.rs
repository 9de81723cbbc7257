//! REPL command parsing.
//!
//! A plain line is a message to the current counterpart; slash commands
//! drive everything else.

use thiserror::Error;

/// One parsed REPL line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/to <user>` — choose the direct-message counterpart
    To { user_id: String },
    /// Plain line — send it to the current counterpart
    Say { content: String },
    /// `/typing` — simulate composer activity toward the counterpart
    Typing,
    /// `/like <complaint>` — add a like
    Like { complaint_id: String },
    /// `/unlike <complaint>` — withdraw a like
    Unlike { complaint_id: String },
    /// `/comment <complaint> <text>` — append a comment
    Comment { complaint_id: String, text: String },
    /// `/history <user>` — fetch the conversation history over HTTP
    History { user_id: String },
    /// `/conversations` — fetch the conversation list over HTTP
    Conversations,
    /// `/presence` — show the mirrored online-user map
    Presence,
    /// `/help`
    Help,
    /// `/quit`
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: /{0}")]
    UnknownCommand(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
}

/// Parse one REPL line.
///
/// Empty lines are `Say` with empty content; the caller drops them.
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let Some(rest) = line.strip_prefix('/') else {
        return Ok(Command::Say {
            content: line.to_string(),
        });
    };

    let (name, args) = match rest.split_once(char::is_whitespace) {
        Some((name, args)) => (name, args.trim()),
        None => (rest, ""),
    };

    match name {
        "to" => match args.split_whitespace().next() {
            Some(user_id) => Ok(Command::To {
                user_id: user_id.to_string(),
            }),
            None => Err(CommandError::MissingArgument("user")),
        },
        "typing" => Ok(Command::Typing),
        "like" | "unlike" => match args.split_whitespace().next() {
            Some(complaint_id) => {
                let complaint_id = complaint_id.to_string();
                if name == "like" {
                    Ok(Command::Like { complaint_id })
                } else {
                    Ok(Command::Unlike { complaint_id })
                }
            }
            None => Err(CommandError::MissingArgument("complaint")),
        },
        "comment" => match args.split_once(char::is_whitespace) {
            Some((complaint_id, text)) if !text.trim().is_empty() => Ok(Command::Comment {
                complaint_id: complaint_id.to_string(),
                text: text.trim().to_string(),
            }),
            _ => Err(CommandError::MissingArgument("complaint and text")),
        },
        "history" => match args.split_whitespace().next() {
            Some(user_id) => Ok(Command::History {
                user_id: user_id.to_string(),
            }),
            None => Err(CommandError::MissingArgument("user")),
        },
        "conversations" => Ok(Command::Conversations),
        "presence" => Ok(Command::Presence),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}
