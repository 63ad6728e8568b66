use super::config::ServerConfig;
use super::session::Session;
use crate::Result;
use crate::routing::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::net::TcpStream;
use tokio::{signal, time::timeout};
use tracing::{Instrument, error, info, warn};

/// HTTP server: accepts TCP connections and runs one [`Session`] per
/// connection against a shared read-only [`Router`].
///
/// # Examples
///
/// Basic server setup and running:
///
/// ```no_run
/// use httpsrv::{HttpServer, Response, RouteTableBuilder, Router, ServerConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let table = RouteTableBuilder::new()
///         .route("GET", "/", |_req| Response::new(200, "text/plain", "Welcome to the home page!\n"))
///         .build();
///
///     let server = HttpServer::new(ServerConfig::default(), Router::new(table));
///     server.run().await?;
///     Ok(())
/// }
/// ```
///
/// Server with graceful shutdown:
///
/// ```no_run
/// use httpsrv::{HttpServer, Router, RouteTableBuilder, ServerConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let server = HttpServer::new(
///         ServerConfig::default(),
///         Router::new(RouteTableBuilder::new().build()),
///     );
///     let shutdown_signal = server.shutdown_signal();
///
///     let server_handle = tokio::spawn(async move { server.run().await });
///
///     // Do other work...
///
///     let _ = shutdown_signal.send(());
///     server_handle.await??;
///     Ok(())
/// }
/// ```
pub struct HttpServer {
    config: ServerConfig,
    router: Arc<Router>,
    shutdown_signal: Arc<tokio::sync::broadcast::Sender<()>>,
}

impl HttpServer {
    /// Creates a new server around an immutable router
    pub fn new(config: ServerConfig, router: Router) -> Self {
        let (shutdown_signal, _) = tokio::sync::broadcast::channel(1);
        Self {
            config,
            router: Arc::new(router),
            shutdown_signal: Arc::new(shutdown_signal),
        }
    }

    /// Handles a single accepted connection: one read, one dispatch, one
    /// response, then close.
    async fn handle_connection(
        stream: TcpStream,
        addr: SocketAddr,
        router: Arc<Router>,
        config: ServerConfig,
    ) -> Result<()> {
        let mut session = Session::new(stream, config.buffer_size);

        let response = match timeout(config.read_timeout, session.dispatch(&router)).await {
            Ok(Ok(Some(response))) => response,
            Ok(Ok(None)) => {
                info!(%addr, "Client closed connection");
                return Ok(());
            }
            Ok(Err(e)) => {
                return Err(e);
            }
            Err(_) => {
                warn!(%addr, "Read timeout");
                session.close().await;
                return Ok(());
            }
        };

        match timeout(config.write_timeout, session.respond(&response)).await {
            Ok(Ok(())) => {
                info!(%addr, status = response.status_code, size = response.body.len(), "Response sent");
            }
            Ok(Err(e)) => {
                return Err(e);
            }
            Err(_) => {
                warn!(%addr, "Write timeout");
                session.close().await;
            }
        }

        Ok(())
    }

    /// Starts the server and listens for connections
    pub async fn run(&self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(self.config.bind_addr).await?;

        info!(address = %self.config.bind_addr, routes = self.router.table().len(), "HTTP server listening");

        let connection_count = Arc::new(AtomicUsize::new(0));
        let mut shutdown_rx = self.shutdown_signal.subscribe();

        loop {
            tokio::select! {
                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((stream, addr)) => {
                            let current_count = connection_count.load(Ordering::SeqCst);
                            if current_count >= self.config.max_connections {
                                warn!(%addr, current = current_count, limit = self.config.max_connections, "Connection rejected: limit reached");
                                continue;
                            }

                            connection_count.fetch_add(1, Ordering::SeqCst);
                            let new_count = connection_count.load(Ordering::SeqCst);
                            info!(%addr, current = new_count, "Accepted connection");

                            let config = self.config.clone();
                            let router = self.router.clone();
                            let connection_count = connection_count.clone();
                            let span = tracing::info_span!("connection", %addr);

                            tokio::spawn(async move {
                                if let Err(e) = Self::handle_connection(stream, addr, router, config).instrument(span).await {
                                    error!(%addr, error = %e, "Error handling connection");
                                }
                                let final_count = connection_count.fetch_sub(1, Ordering::SeqCst) - 1;
                                info!(%addr, current = final_count, "Connection closed");
                            });
                        }
                        Err(e) => {
                            error!(error = %e, "Failed to accept connection");
                        }
                    }
                }
                _ = signal::ctrl_c() => {
                    info!("Received shutdown signal, stopping server");
                    break;
                }
                _ = shutdown_rx.recv() => {
                    info!("Received internal shutdown signal, stopping server");
                    break;
                }
            }
        }

        info!("HTTP server stopped");
        Ok(())
    }

    /// Returns a shutdown signal sender that can be used to gracefully shutdown the server
    pub fn shutdown_signal(&self) -> tokio::sync::broadcast::Sender<()> {
        self.shutdown_signal.as_ref().clone()
    }

    /// The router this server dispatches through
    pub fn router(&self) -> &Router {
        &self.router
    }
}
