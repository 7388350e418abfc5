//! End-to-end: the application object served on a real socket, driven by the chat client.
//!
//! **Scenario**: `agent_server::app` with a mock LLM, bound to an ephemeral local port,
//! answers `agent_chat::HttpTransport` sends; agent failures reach the client as a plain-text
//! 500, which the client renders as the fixed error entry.

use std::sync::Arc;

use agent_chat::{ChatMessage, ChatSession, ClientConfig, HttpTransport};
use agent_server::{app, AppState, ChatAgent, MockLlm};

async fn serve(llm: MockLlm) -> String {
    let router = app(Arc::new(AppState::new(ChatAgent::new(Box::new(llm)))));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn client_receives_agent_reply() {
    let base = serve(MockLlm::echo()).await;
    let (mut session, mut settled) = ChatSession::new(HttpTransport::new(ClientConfig::new(base)));

    session.draft_mut().set("hello agent");
    session.send_message();
    session.drain(&mut settled, |_| {}).await;

    assert_eq!(
        session.log().entries(),
        &[
            ChatMessage::you("hello agent"),
            ChatMessage::agent("hello agent")
        ]
    );
    assert!(session.draft().is_empty());
}

/// **Scenario**: A failing agent yields a plain-text 500; the body does not parse as JSON,
/// so the client appends the fixed error entry.
#[tokio::test]
async fn agent_failure_reaches_client_as_error_entry() {
    let base = serve(MockLlm::failing("model down")).await;
    let (mut session, mut settled) = ChatSession::new(HttpTransport::new(ClientConfig::new(base)));

    session.draft_mut().set("hi");
    session.send_message();
    session.drain(&mut settled, |_| {}).await;

    assert_eq!(
        session.log().entries(),
        &[ChatMessage::you("hi"), ChatMessage::error()]
    );
}

/// **Scenario**: Several sends in flight at once each get exactly one Agent entry.
#[tokio::test]
async fn concurrent_sends_each_settle_once() {
    let base = serve(MockLlm::echo()).await;
    let (mut session, mut settled) = ChatSession::new(HttpTransport::new(ClientConfig::new(base)));

    for m in ["one", "two", "three"] {
        session.draft_mut().set(m);
        session.send_message();
    }
    assert_eq!(session.log().len(), 3);
    session.drain(&mut settled, |_| {}).await;

    let mut replies: Vec<&str> = session.log().entries()[3..]
        .iter()
        .map(|e| e.text.as_str())
        .collect();
    replies.sort();
    assert_eq!(replies, vec!["one", "three", "two"]);
}
