//! Server state and connection management.

use std::{collections::HashMap, sync::Arc};
use tokio::sync::{Mutex, mpsc};

use madoguchi_shared::event::ServerEvent;

use crate::domain::{
    ComplaintRepository, ConnectionId, IdentityVerifier, LikeCache, MessageRepository,
    PresenceRegistry,
};

/// Shared application state
///
/// The connection map is owned here by the transport layer; the presence
/// registry keeps only user → connection-id back-links into it. All other
/// fields are the domain collaborators, injected once at startup.
pub struct AppState {
    /// Live connections: connection id → outbound channel to its writer task
    pub connections: Arc<Mutex<HashMap<ConnectionId, mpsc::UnboundedSender<String>>>>,
    /// Presence Registry（ユーザー → 接続のマッピング）
    pub presence: Arc<dyn PresenceRegistry>,
    /// Direct-message storage
    pub messages: Arc<dyn MessageRepository>,
    /// Complaint storage (comment append + fetch)
    pub complaints: Arc<dyn ComplaintRepository>,
    /// Process-local like cache
    pub likes: Arc<dyn LikeCache>,
    /// Identity collaborator for claimed user ids
    pub verifier: Arc<dyn IdentityVerifier>,
}

impl AppState {
    /// Assemble the state from its collaborators.
    pub fn new(
        presence: Arc<dyn PresenceRegistry>,
        messages: Arc<dyn MessageRepository>,
        complaints: Arc<dyn ComplaintRepository>,
        likes: Arc<dyn LikeCache>,
        verifier: Arc<dyn IdentityVerifier>,
    ) -> Self {
        Self {
            connections: Arc::new(Mutex::new(HashMap::new())),
            presence,
            messages,
            complaints,
            likes,
            verifier,
        }
    }

    /// Register a new connection's outbound channel.
    pub async fn register_connection(
        &self,
        connection: ConnectionId,
        sender: mpsc::UnboundedSender<String>,
    ) {
        let mut connections = self.connections.lock().await;
        connections.insert(connection, sender);
    }

    /// Drop a connection's outbound channel.
    pub async fn remove_connection(&self, connection: &ConnectionId) {
        let mut connections = self.connections.lock().await;
        connections.remove(connection);
    }

    /// Deliver an event to exactly one connection.
    ///
    /// Delivery to a vanished connection silently no-ops.
    pub async fn unicast(&self, connection: &ConnectionId, event: &ServerEvent) {
        let json = serde_json::to_string(event).unwrap();
        let connections = self.connections.lock().await;
        if let Some(sender) = connections.get(connection)
            && sender.send(json).is_err()
        {
            tracing::warn!("Failed to deliver event to connection '{}'", connection);
        }
    }

    /// Deliver an event to every connection, optionally excluding one.
    pub async fn broadcast(&self, event: &ServerEvent, except: Option<&ConnectionId>) {
        let json = serde_json::to_string(event).unwrap();
        let connections = self.connections.lock().await;
        for (id, sender) in connections.iter() {
            if Some(id) == except {
                continue;
            }
            if sender.send(json.clone()).is_err() {
                tracing::warn!("Failed to deliver event to connection '{}'", id);
            }
        }
    }
}
