use super::config::ServerConfig;
use super::server::HttpServer;
use super::session::{Session, SessionState};
use crate::routing::{RouteTableBuilder, Router};
use crate::http::Response;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWriteExt;

fn test_router() -> Router {
    Router::new(
        RouteTableBuilder::new()
            .route("GET", "/", |_req| {
                Response::new(200, "text/plain", "home")
            })
            .build(),
    )
}

#[tokio::test]
async fn test_config_default() {
    let config = ServerConfig::default();
    assert_eq!(config.bind_addr.port(), 3000);
    assert_eq!(config.max_connections, 100);
    assert_eq!(config.buffer_size, 8192);
    assert_eq!(config.read_timeout, std::time::Duration::from_secs(30));
    assert_eq!(config.write_timeout, std::time::Duration::from_secs(30));
}

#[tokio::test]
async fn test_server_new() {
    let server = HttpServer::new(ServerConfig::default(), test_router());
    assert!(server.shutdown_signal().receiver_count() == 0);
    assert_eq!(server.router().table().len(), 1);
}

#[tokio::test]
async fn test_session_happy_path_states() {
    let (mut client, server_end) = tokio::io::duplex(4096);
    let router = test_router();
    let mut session = Session::new(server_end, 4096);

    assert_eq!(session.state(), SessionState::AwaitingData);

    client
        .write_all(b"GET / HTTP/1.1\r\nHost: test\r\n\r\n")
        .await
        .unwrap();

    let response = session.dispatch(&router).await.unwrap().unwrap();
    assert_eq!(session.state(), SessionState::Dispatching);
    assert_eq!(response.status_code, 200);

    session.respond(&response).await.unwrap();
    assert_eq!(session.state(), SessionState::Closed);

    // The encoded response is on the wire and the transport reached EOF
    let mut wire = Vec::new();
    client.read_to_end(&mut wire).await.unwrap();
    assert_eq!(
        String::from_utf8(wire).unwrap(),
        "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 4\r\n\r\nhome"
    );
}

#[tokio::test]
async fn test_session_peer_close_without_data() {
    let (client, server_end) = tokio::io::duplex(4096);
    let router = test_router();
    let mut session = Session::new(server_end, 4096);

    drop(client);

    let outcome = session.dispatch(&router).await.unwrap();
    assert!(outcome.is_none());
    assert_eq!(session.state(), SessionState::Closed);
}

#[tokio::test]
async fn test_session_malformed_request_yields_400() {
    let (mut client, server_end) = tokio::io::duplex(4096);
    let router = test_router();
    let mut session = Session::new(server_end, 4096);

    client.write_all(b"\r\n\r\n").await.unwrap();

    let response = session.dispatch(&router).await.unwrap().unwrap();
    assert_eq!(response, Response::bad_request());
}

#[tokio::test]
async fn test_session_unrouted_request_yields_404() {
    let (mut client, server_end) = tokio::io::duplex(4096);
    let router = test_router();
    let mut session = Session::new(server_end, 4096);

    client
        .write_all(b"GET /missing HTTP/1.1\r\n\r\n")
        .await
        .unwrap();

    let response = session.dispatch(&router).await.unwrap().unwrap();
    assert_eq!(response, Response::not_found());
}

#[tokio::test]
async fn test_session_ignores_data_after_first_read() {
    // One request per connection: a second message on the same transport
    // is never dispatched.
    let (mut client, server_end) = tokio::io::duplex(4096);
    let router = test_router();
    let mut session = Session::new(server_end, 4096);

    client
        .write_all(b"GET / HTTP/1.1\r\n\r\n")
        .await
        .unwrap();

    let response = session.dispatch(&router).await.unwrap().unwrap();
    client
        .write_all(b"GET /second HTTP/1.1\r\n\r\n")
        .await
        .unwrap();
    session.respond(&response).await.unwrap();

    assert_eq!(session.state(), SessionState::Closed);

    let mut wire = Vec::new();
    client.read_to_end(&mut wire).await.unwrap();
    let text = String::from_utf8(wire).unwrap();
    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
    // Exactly one response came back
    assert_eq!(text.matches("HTTP/1.1").count(), 1);
}

#[tokio::test]
async fn test_session_write_error_moves_to_errored() {
    let (mut client, server_end) = tokio::io::duplex(4096);
    let router = test_router();
    let mut session = Session::new(server_end, 4096);

    // Peer writes a request and immediately goes away
    client.write_all(b"GET / HTTP/1.1\r\n\r\n").await.unwrap();
    let response = session.dispatch(&router).await.unwrap().unwrap();
    drop(client);

    let result = session.respond(&response).await;
    assert!(result.is_err());
    assert_eq!(session.state(), SessionState::Errored);
}

#[tokio::test]
async fn test_session_explicit_close() {
    let (_client, server_end) = tokio::io::duplex(4096);
    let mut session = Session::new(server_end, 4096);

    assert_eq!(session.state(), SessionState::AwaitingData);
    session.close().await;
    assert_eq!(session.state(), SessionState::Closed);
}
