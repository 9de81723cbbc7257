//! HTTP API integration tests.
//!
//! Tests for the REST endpoints (health check, conversation history and
//! list, complaint social state, presence snapshot).

mod fixtures;
use fixtures::TestServer;

use madoguchi_server::domain::{Comment, Timestamp, UserId};

#[tokio::test]
async fn test_health_endpoint() {
    // テスト項目: /api/health エンドポイントが正常に動作する
    // given (前提条件):
    let port = 19080;
    let server = TestServer::start(port);
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/api/health", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_history_requires_identity_header() {
    // テスト項目: x-user-id ヘッダーなしの履歴取得は 401 になる
    // given (前提条件):
    let port = 19081;
    let server = TestServer::start(port);
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!(
            "{}/api/messages/conversations/bob",
            server.base_url()
        ))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_history_endpoint_marks_read() {
    // テスト項目: 履歴が昇順で返り、取得により相手からの未読が既読化される
    // given (前提条件):
    let port = 19082;
    let server = TestServer::start(port);
    server.seed_message("bob", "alice", "first", 1000).await;
    server.seed_message("alice", "bob", "second", 2000).await;
    server.seed_message("bob", "alice", "third", 3000).await;
    let client = reqwest::Client::new();
    let url = format!("{}/api/messages/conversations/bob", server.base_url());

    // when (操作): alice が bob との履歴を取得
    let response = client
        .get(&url)
        .header("x-user-id", "alice")
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果): 作成時刻の昇順、最初の取得は既読化前のスナップショット
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let messages = body.as_array().expect("Response should be an array");
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0]["content"], "first");
    assert_eq!(messages[1]["content"], "second");
    assert_eq!(messages[2]["content"], "third");
    assert_eq!(messages[0]["read"], false);
    assert!(messages[0]["createdAt"].is_string());

    // 2回目の取得では bob→alice のみ既読になっている
    let second: serde_json::Value = client
        .get(&url)
        .header("x-user-id", "alice")
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");
    let messages = second.as_array().unwrap();
    assert_eq!(messages[0]["read"], true); // bob → alice
    assert_eq!(messages[1]["read"], false); // alice → bob
    assert_eq!(messages[2]["read"], true); // bob → alice
}

#[tokio::test]
async fn test_conversations_endpoint() {
    // テスト項目: 会話一覧は相手ごとに最新の1件だけを新しい順で返す
    // given (前提条件):
    let port = 19083;
    let server = TestServer::start(port);
    server.seed_message("alice", "bob", "old to bob", 1000).await;
    server.seed_message("bob", "alice", "latest with bob", 2000).await;
    server.seed_message("carol", "alice", "from carol", 3000).await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/api/messages/conversations", server.base_url()))
        .header("x-user-id", "alice")
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let conversations = body.as_array().expect("Response should be an array");
    assert_eq!(conversations.len(), 2);
    assert_eq!(conversations[0]["counterpart"], "carol");
    assert_eq!(conversations[0]["lastMessage"]["content"], "from carol");
    assert_eq!(conversations[1]["counterpart"], "bob");
    assert_eq!(conversations[1]["lastMessage"]["content"], "latest with bob");
}

#[tokio::test]
async fn test_complaint_social_endpoint() {
    // テスト項目: 苦情の社会的状態（コメント・いいね）を取得できる
    // given (前提条件):
    let port = 19084;
    let server = TestServer::start(port);
    server
        .seed_complaint(
            "c-1",
            vec![Comment::new(
                "cm-1".to_string(),
                UserId::new("alice".to_string()).unwrap(),
                "Alice".to_string(),
                "Pothole is still there".to_string(),
                Timestamp::new(1000),
            )],
        )
        .await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/api/complaints/c-1", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["id"], "c-1");
    assert_eq!(body["likes"].as_array().unwrap().len(), 0);
    let comments = body["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["userId"], "alice");
    assert_eq!(comments[0]["userName"], "Alice");
    assert_eq!(comments[0]["text"], "Pothole is still there");
}

#[tokio::test]
async fn test_complaint_social_endpoint_not_found() {
    // テスト項目: 存在しない苦情に対して 404 を返す
    // given (前提条件):
    let port = 19085;
    let server = TestServer::start(port);
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/api/complaints/nonexistent", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_presence_endpoint_empty() {
    // テスト項目: 接続がなければ在席スナップショットは空
    // given (前提条件):
    let port = 19086;
    let server = TestServer::start(port);
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/api/presence", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["online"].as_array().unwrap().len(), 0);
}
