use color_eyre::eyre::{Result, WrapErr};
use httpsrv::{HttpServer, Response, RouteTableBuilder, Router, ServerConfig, parse_body};

use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("httpsrv=info")
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    let port = args
        .get(1)
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    let table = RouteTableBuilder::new()
        .route("GET", "/", |_req| {
            Response::new(200, "text/plain", "Welcome to the home page!\n")
        })
        .route("GET", "/about", |_req| {
            Response::new(200, "text/plain", "This server speaks HTTP/1.1 over a raw TCP stream.\n")
        })
        .route("POST", "/submit", |req| {
            let params = parse_body(&req.body);
            match params.get("name") {
                Some(name) => Response::new(200, "text/plain", format!("Thanks, {name}!\n")),
                None => Response::new(400, "text/plain", "Missing 'name' field\n"),
            }
        })
        .build();

    let config = ServerConfig {
        bind_addr: format!("127.0.0.1:{}", port)
            .parse()
            .wrap_err("Invalid bind address")?,
        ..Default::default()
    };

    info!(address = %config.bind_addr, max_connections = config.max_connections, "Starting HTTP server");

    let server = HttpServer::new(config, Router::new(table));
    server.run().await.wrap_err("Failed to run HTTP server")?;

    Ok(())
}
