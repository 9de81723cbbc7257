//! CLI client for the complaint-portal real-time server.
//!
//! Speaks the WebSocket contract at `/chat` and the HTTP API under `/api`.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin madoguchi-client -- --user-id alice
//! ```

use std::{sync::Arc, time::Instant};

use clap::Parser;
use futures_util::{SinkExt, stream::SplitSink, stream::StreamExt};
use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::{net::TcpStream, sync::Mutex, sync::mpsc};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message,
};

use madoguchi_client::{ClientError, Command, PresenceMirror, TypingTracker, command};
use madoguchi_shared::{
    event::{ClientEvent, CommentPayload, LikeAction, ServerEvent},
    logger::setup_logger,
    time::{get_jst_timestamp, timestamp_to_jst_rfc3339},
};

type WsSink = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, Message>;

#[derive(Debug, Parser)]
#[command(about = "CLI client for the municipal complaint portal real-time server")]
struct Args {
    /// Server base URL
    #[arg(long, default_value = "http://localhost:5000")]
    server: String,

    /// User id to authenticate as
    #[arg(long)]
    user_id: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    if let Err(e) = run(args).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), ClientError> {
    let ws_url = format!("{}/chat", args.server.replacen("http", "ws", 1));
    let (ws_stream, _) = connect_async(ws_url.as_str()).await?;
    let (mut write, mut read) = ws_stream.split();

    // Bind this connection to our identity before anything else
    send_event(
        &mut write,
        &ClientEvent::Authenticate {
            user_id: args.user_id.clone(),
        },
    )
    .await?;
    println!("Connected to {} as '{}'", ws_url, args.user_id);
    print_help();

    // Online/offline map: seeded from the snapshot below, then driven by
    // user_status events
    let presence = Arc::new(Mutex::new(PresenceMirror::new()));

    // Print pushed events as they arrive
    let reader_presence = presence.clone();
    let mut read_task = tokio::spawn(async move {
        while let Some(msg) = read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    match serde_json::from_str::<ServerEvent>(text.as_str()) {
                        Ok(event) => {
                            if let ServerEvent::UserStatus { user_id, status } = &event {
                                reader_presence
                                    .lock()
                                    .await
                                    .apply(user_id.clone(), *status);
                            }
                            print_event(&event);
                        }
                        Err(e) => tracing::warn!("Unrecognized server event: {}", e),
                    }
                }
                Ok(Message::Close(_)) => {
                    println!("Server closed the connection");
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            }
        }
    });

    // rustyline blocks, so it gets its own thread feeding a channel
    let (line_tx, mut line_rx) = mpsc::unbounded_channel::<String>();
    std::thread::spawn(move || {
        let mut editor = match DefaultEditor::new() {
            Ok(editor) => editor,
            Err(e) => {
                eprintln!("Failed to initialize input: {e}");
                return;
            }
        };
        loop {
            match editor.readline("> ") {
                Ok(line) => {
                    let _ = editor.add_history_entry(&line);
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => {
                    eprintln!("Input error: {e}");
                    break;
                }
            }
        }
    });

    let http = reqwest::Client::new();
    seed_presence(&args, &http, &presence).await;

    let mut counterpart: Option<String> = None;
    let mut tracker = TypingTracker::default();

    loop {
        // The typing indicator withdraws itself after the idle window
        let idle = async {
            match tracker.idle_deadline() {
                Some(deadline) => tokio::time::sleep_until(deadline.into()).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            maybe_line = line_rx.recv() => {
                let Some(line) = maybe_line else { break };
                if line.trim().is_empty() {
                    continue;
                }
                let command = match command::parse(&line) {
                    Ok(command) => command,
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                };
                if !handle_command(
                    &args,
                    &http,
                    &mut write,
                    &mut counterpart,
                    &mut tracker,
                    &presence,
                    command,
                )
                .await?
                {
                    break;
                }
            }
            _ = idle => {
                if tracker.on_deadline(Instant::now())
                    && let Some(receiver_id) = counterpart.clone()
                {
                    send_event(
                        &mut write,
                        &ClientEvent::Typing { receiver_id, is_typing: false },
                    )
                    .await?;
                }
            }
            _ = &mut read_task => break,
        }
    }

    let _ = write.send(Message::Close(None)).await;
    read_task.abort();
    Ok(())
}

/// Execute one parsed command. Returns `false` when the client should exit.
async fn handle_command(
    args: &Args,
    http: &reqwest::Client,
    write: &mut WsSink,
    counterpart: &mut Option<String>,
    tracker: &mut TypingTracker,
    presence: &Arc<Mutex<PresenceMirror>>,
    command: Command,
) -> Result<bool, ClientError> {
    match command {
        Command::To { user_id } => {
            println!("Now messaging '{}'", user_id);
            *counterpart = Some(user_id);
        }
        Command::Say { content } => {
            let Some(receiver_id) = counterpart.clone() else {
                println!("No counterpart selected; use /to <user> first");
                return Ok(true);
            };
            // Submitting the message ends the composing burst
            if tracker.cancel() {
                send_event(
                    write,
                    &ClientEvent::Typing {
                        receiver_id: receiver_id.clone(),
                        is_typing: false,
                    },
                )
                .await?;
            }
            send_event(
                write,
                &ClientEvent::SendMessage {
                    receiver_id,
                    content,
                },
            )
            .await?;
        }
        Command::Typing => {
            let Some(receiver_id) = counterpart.clone() else {
                println!("No counterpart selected; use /to <user> first");
                return Ok(true);
            };
            if tracker.on_input(Instant::now()) {
                send_event(
                    write,
                    &ClientEvent::Typing {
                        receiver_id,
                        is_typing: true,
                    },
                )
                .await?;
            }
        }
        Command::Like { complaint_id } => {
            send_event(
                write,
                &ClientEvent::ToggleLike {
                    complaint_id,
                    user_id: args.user_id.clone(),
                    action: LikeAction::Like,
                },
            )
            .await?;
        }
        Command::Unlike { complaint_id } => {
            send_event(
                write,
                &ClientEvent::ToggleLike {
                    complaint_id,
                    user_id: args.user_id.clone(),
                    action: LikeAction::Unlike,
                },
            )
            .await?;
        }
        Command::Comment { complaint_id, text } => {
            let now = get_jst_timestamp();
            send_event(
                write,
                &ClientEvent::AddComment {
                    complaint_id,
                    comment: CommentPayload {
                        id: format!("cm-{now}"),
                        user_id: args.user_id.clone(),
                        user_name: args.user_id.clone(),
                        text,
                        created_at: now,
                    },
                },
            )
            .await?;
        }
        Command::History { user_id } => {
            let url = format!("{}/api/messages/conversations/{}", args.server, user_id);
            fetch_and_print(args, http, &url).await?;
        }
        Command::Conversations => {
            let url = format!("{}/api/messages/conversations", args.server);
            fetch_and_print(args, http, &url).await?;
        }
        Command::Presence => {
            let online = presence.lock().await.online();
            if online.is_empty() {
                println!("No one is online");
            } else {
                for user in online {
                    println!("* {user} is online");
                }
            }
        }
        Command::Help => print_help(),
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

/// Seed the presence mirror from the server's snapshot. Best effort: a
/// failed fetch leaves the mirror empty and later `user_status` events fill
/// it in.
async fn seed_presence(
    args: &Args,
    http: &reqwest::Client,
    presence: &Arc<Mutex<PresenceMirror>>,
) {
    let url = format!("{}/api/presence", args.server);
    let body: Result<serde_json::Value, _> = async {
        http.get(&url).send().await?.json().await
    }
    .await;
    match body {
        Ok(body) => {
            let online = body["online"]
                .as_array()
                .map(|users| {
                    users
                        .iter()
                        .filter_map(|user| user.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default();
            presence.lock().await.seed(online);
        }
        Err(e) => tracing::warn!("Failed to seed presence snapshot: {}", e),
    }
}

async fn send_event(write: &mut WsSink, event: &ClientEvent) -> Result<(), ClientError> {
    let json = serde_json::to_string(event)?;
    write.send(Message::Text(json.into())).await?;
    Ok(())
}

async fn fetch_and_print(
    args: &Args,
    http: &reqwest::Client,
    url: &str,
) -> Result<(), ClientError> {
    let response = http
        .get(url)
        .header("x-user-id", &args.user_id)
        .send()
        .await?;
    let status = response.status();
    let body: serde_json::Value = response.json().await.unwrap_or(serde_json::Value::Null);
    if status.is_success() {
        match serde_json::to_string_pretty(&body) {
            Ok(pretty) => println!("{pretty}"),
            Err(_) => println!("{body}"),
        }
    } else {
        println!("Request failed: {status}");
    }
    Ok(())
}

fn print_event(event: &ServerEvent) {
    match event {
        ServerEvent::ReceiveMessage(message) => {
            println!(
                "[{}] {}: {}",
                timestamp_to_jst_rfc3339(message.timestamp),
                message.sender,
                message.content
            );
        }
        ServerEvent::MessageSent(message) => {
            println!(
                "[{}] (delivered to {}) {}",
                timestamp_to_jst_rfc3339(message.timestamp),
                message.receiver,
                message.content
            );
        }
        ServerEvent::MessageError { error } => {
            println!("! {error}");
        }
        ServerEvent::UserTyping { user_id, is_typing } => {
            if *is_typing {
                println!("{user_id} is typing...");
            } else {
                println!("{user_id} stopped typing");
            }
        }
        ServerEvent::UserStatus { user_id, status } => {
            println!("* {user_id} is now {status}");
        }
        ServerEvent::LikeUpdate {
            complaint_id,
            likes,
        } => {
            println!("Complaint {} now has {} likes", complaint_id, likes.len());
        }
        ServerEvent::CommentUpdate {
            complaint_id,
            comment,
        } => {
            println!(
                "[{}] comment on {} by {}: {}",
                timestamp_to_jst_rfc3339(comment.created_at),
                complaint_id,
                comment.user_name,
                comment.text
            );
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  /to <user>                 choose a direct-message counterpart");
    println!("  <text>                     send a message to the counterpart");
    println!("  /typing                    signal composer activity");
    println!("  /like <complaint>          like a complaint");
    println!("  /unlike <complaint>        withdraw a like");
    println!("  /comment <complaint> <..>  comment on a complaint");
    println!("  /history <user>            fetch conversation history");
    println!("  /conversations             fetch the conversation list");
    println!("  /presence                  show who is currently online");
    println!("  /quit                      exit");
}
