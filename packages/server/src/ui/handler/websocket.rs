//! WebSocket connection handlers.
//!
//! One connection runs two tasks: a recv task parsing client events and a
//! send task draining the connection's outbound channel. Either task ending
//! aborts the other, then the cleanup path unbinds presence and broadcasts
//! the offline status.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::{Mutex, mpsc};

use madoguchi_shared::event::{ClientEvent, LikeAction, PresenceStatus, ServerEvent};

use crate::{
    domain::{ConnectionId, ConnectionIdFactory, LikeToggle, UserId},
    infrastructure::dto::websocket::{comment_from_payload, comment_to_payload, message_to_payload},
    ui::state::AppState,
    usecase::{
        AddCommentUseCase, AuthenticateUserUseCase, DisconnectUserUseCase, NotifyTypingUseCase,
        SendDirectMessageUseCase, ToggleLikeUseCase,
    },
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connection_id = ConnectionIdFactory::generate();
    let (mut sender, mut receiver) = socket.split();

    // Create a channel for this connection to receive events
    let (tx, mut rx) = mpsc::unbounded_channel();
    state.register_connection(connection_id.clone(), tx).await;
    tracing::info!("Connection '{}' opened", connection_id);

    // The bound identity outlives the recv task so the cleanup path can
    // still read it when the send task is the one that ends first.
    let authenticated: Arc<Mutex<Option<UserId>>> = Arc::new(Mutex::new(None));

    let recv_state = state.clone();
    let recv_connection = connection_id.clone();
    let recv_authenticated = authenticated.clone();

    // Spawn a task to receive events from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    // Malformed payloads are logged and ignored; the
                    // connection stays up.
                    let event = match serde_json::from_str::<ClientEvent>(&text) {
                        Ok(event) => event,
                        Err(e) => {
                            tracing::warn!("Failed to parse event as JSON: {}", e);
                            continue;
                        }
                    };

                    dispatch_event(
                        &recv_state,
                        &recv_connection,
                        &recv_authenticated,
                        event,
                    )
                    .await;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", recv_connection);
                    break;
                }
                _ => {}
            }
        }
    });

    // Spawn a task to forward queued events to this client
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Cleanup: drop the channel first so no further event targets this
    // connection, then unbind presence and announce the departure.
    state.remove_connection(&connection_id).await;
    let user = authenticated.lock().await.clone();
    if let Some(user) = user {
        let disconnect_usecase = DisconnectUserUseCase::new(state.presence.clone());
        disconnect_usecase.execute(&user).await;
        tracing::info!("User '{}' disconnected", user);

        state
            .broadcast(
                &ServerEvent::UserStatus {
                    user_id: user.into_string(),
                    status: PresenceStatus::Offline,
                },
                Some(&connection_id),
            )
            .await;
    } else {
        tracing::info!("Connection '{}' closed before authenticating", connection_id);
    }
}

/// Route one parsed client event to its use case and deliver the results.
async fn dispatch_event(
    state: &Arc<AppState>,
    connection: &ConnectionId,
    authenticated: &Arc<Mutex<Option<UserId>>>,
    event: ClientEvent,
) {
    match event {
        ClientEvent::Authenticate { user_id } => {
            let usecase =
                AuthenticateUserUseCase::new(state.presence.clone(), state.verifier.clone());
            match usecase.execute(&user_id, connection.clone()).await {
                Ok(user) => {
                    tracing::info!("User '{}' authenticated on '{}'", user, connection);
                    *authenticated.lock().await = Some(user.clone());

                    // Everyone except the subject learns about the arrival
                    state
                        .broadcast(
                            &ServerEvent::UserStatus {
                                user_id: user.into_string(),
                                status: PresenceStatus::Online,
                            },
                            Some(connection),
                        )
                        .await;
                }
                Err(e) => {
                    // Failed authentication leaves the connection open but unbound
                    tracing::warn!("Authentication failed on '{}': {}", connection, e);
                }
            }
        }
        ClientEvent::SendMessage {
            receiver_id,
            content,
        } => {
            let sender = authenticated.lock().await.clone();
            let Some(sender) = sender else {
                state
                    .unicast(
                        connection,
                        &ServerEvent::MessageError {
                            error: "Not authenticated".to_string(),
                        },
                    )
                    .await;
                return;
            };

            let usecase =
                SendDirectMessageUseCase::new(state.messages.clone(), state.presence.clone());
            match usecase.execute(sender, receiver_id, content).await {
                Ok(outcome) => {
                    let payload = message_to_payload(&outcome.message);

                    // Live delivery only if the receiver is online; offline
                    // receivers catch up through the history endpoint.
                    if let Some(receiver_connection) = &outcome.receiver_connection {
                        state
                            .unicast(
                                receiver_connection,
                                &ServerEvent::ReceiveMessage(payload.clone()),
                            )
                            .await;
                    }

                    // Confirmation is a distinct event so the sender's UI can
                    // deduplicate against its optimistic echo
                    state
                        .unicast(connection, &ServerEvent::MessageSent(payload))
                        .await;
                }
                Err(e) => {
                    tracing::warn!("Failed to send message on '{}': {}", connection, e);
                    state
                        .unicast(
                            connection,
                            &ServerEvent::MessageError {
                                error: "Failed to send message".to_string(),
                            },
                        )
                        .await;
                }
            }
        }
        ClientEvent::Typing {
            receiver_id,
            is_typing,
        } => {
            // Typing from an unbound connection is dropped without feedback
            let sender = authenticated.lock().await.clone();
            let Some(sender) = sender else {
                return;
            };

            let usecase = NotifyTypingUseCase::new(state.presence.clone());
            if let Some(receiver_connection) = usecase.execute(&receiver_id).await {
                state
                    .unicast(
                        &receiver_connection,
                        &ServerEvent::UserTyping {
                            user_id: sender.into_string(),
                            is_typing,
                        },
                    )
                    .await;
            }
        }
        ClientEvent::ToggleLike {
            complaint_id,
            user_id,
            action,
        } => {
            let toggle = match action {
                LikeAction::Like => LikeToggle::Like,
                LikeAction::Unlike => LikeToggle::Unlike,
            };

            let usecase = ToggleLikeUseCase::new(state.likes.clone());
            match usecase.execute(complaint_id.clone(), user_id, toggle).await {
                Ok(likes) => {
                    // Full set to every connection, the actor included
                    state
                        .broadcast(
                            &ServerEvent::LikeUpdate {
                                complaint_id,
                                likes,
                            },
                            None,
                        )
                        .await;
                }
                Err(e) => {
                    tracing::warn!("Ignoring invalid like toggle on '{}': {}", connection, e);
                }
            }
        }
        ClientEvent::AddComment {
            complaint_id,
            comment,
        } => {
            let comment = match comment_from_payload(comment) {
                Ok(comment) => comment,
                Err(e) => {
                    tracing::warn!("Ignoring invalid comment on '{}': {}", connection, e);
                    return;
                }
            };

            // Persist first; a failed append is never broadcast
            let usecase = AddCommentUseCase::new(state.complaints.clone());
            match usecase.execute(complaint_id.clone(), comment).await {
                Ok(comment) => {
                    state
                        .broadcast(
                            &ServerEvent::CommentUpdate {
                                complaint_id,
                                comment: comment_to_payload(&comment),
                            },
                            None,
                        )
                        .await;
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to append comment to complaint '{}': {}",
                        complaint_id,
                        e
                    );
                }
            }
        }
    }
}
