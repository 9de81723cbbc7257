//! Test fixtures for integration tests.

use std::{sync::Arc, time::Duration};

use madoguchi_server::{
    AppState, build_router,
    domain::{
        Comment, Complaint, ComplaintId, DirectMessage, MessageContent, MessageIdFactory,
        Timestamp, UserId,
    },
    infrastructure::{
        InMemoryComplaintRepository, InMemoryLikeCache, InMemoryMessageRepository,
        InMemoryPresenceRegistry, TrustedIdentityVerifier,
    },
};

/// A server instance bound to a fixed port, serving the real router on its
/// own runtime thread. The shared state stays accessible to the test for
/// seeding and inspection.
pub struct TestServer {
    port: u16,
    pub state: Arc<AppState>,
}

impl TestServer {
    pub fn start(port: u16) -> Self {
        let state = Arc::new(AppState::new(
            Arc::new(InMemoryPresenceRegistry::new()),
            Arc::new(InMemoryMessageRepository::new()),
            Arc::new(InMemoryComplaintRepository::new()),
            Arc::new(InMemoryLikeCache::new()),
            Arc::new(TrustedIdentityVerifier),
        ));
        let router = build_router(state.clone());

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("Failed to create runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
                    .await
                    .expect("Failed to bind test port");
                axum::serve(listener, router)
                    .await
                    .expect("Test server stopped");
            });
        });

        // Wait until the listener accepts connections
        for _ in 0..100 {
            if std::net::TcpStream::connect(("127.0.0.1", port)).is_ok() {
                return Self { port, state };
            }
            std::thread::sleep(Duration::from_millis(20));
        }
        panic!("Test server on port {port} did not start");
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    #[allow(dead_code)]
    pub fn ws_url(&self) -> String {
        format!("ws://127.0.0.1:{}/chat", self.port)
    }

    /// Seed one persisted direct message.
    #[allow(dead_code)]
    pub async fn seed_message(&self, sender: &str, receiver: &str, content: &str, at: i64) {
        let message = DirectMessage::new(
            MessageIdFactory::generate().unwrap(),
            UserId::new(sender.to_string()).unwrap(),
            UserId::new(receiver.to_string()).unwrap(),
            MessageContent::new(content.to_string()).unwrap(),
            Timestamp::new(at),
        )
        .unwrap();
        self.state.messages.save(message).await.unwrap();
    }

    /// Seed one complaint record, optionally with comments.
    #[allow(dead_code)]
    pub async fn seed_complaint(&self, id: &str, comments: Vec<Comment>) {
        let mut complaint = Complaint::new(ComplaintId::new(id.to_string()).unwrap());
        for comment in comments {
            complaint.append_comment(comment);
        }
        self.state.complaints.insert(complaint).await.unwrap();
    }

    /// Block until the user appears in the presence registry.
    #[allow(dead_code)]
    pub async fn wait_until_online(&self, user: &str) {
        let user = UserId::new(user.to_string()).unwrap();
        for _ in 0..100 {
            if self.state.presence.lookup(&user).await.is_some() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("User '{user}' never came online");
    }
}
