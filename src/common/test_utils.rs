use crate::routing::{RouteTable, Router};
use crate::server::{HttpServer, ServerConfig};
use crate::{HttpError, Result};
use std::net::SocketAddr;
use tokio::task::JoinHandle;

/// Spawns a server around the given routes on an ephemeral port for tests.
///
/// Returns the server task handle, the bound address, and the shutdown
/// sender for a graceful stop.
pub async fn spawn_test_server(
    table: RouteTable,
) -> Result<(JoinHandle<Result<()>>, SocketAddr, tokio::sync::broadcast::Sender<()>)> {
    use tokio::net::TcpListener;

    // First bind to get the actual address
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|e| HttpError::Config(format!("Failed to bind listener: {e}")))?;
    let addr = listener
        .local_addr()
        .map_err(|e| HttpError::Config(format!("Failed to get local address: {e}")))?;
    drop(listener); // Close the listener so the server can bind to the same address

    let config = ServerConfig {
        bind_addr: addr,
        ..Default::default()
    };

    let server = HttpServer::new(config, Router::new(table));
    let shutdown = server.shutdown_signal();

    let server_handle = tokio::spawn(async move { server.run().await });

    Ok((server_handle, addr, shutdown))
}
