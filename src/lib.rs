use crate::http::request::DecodeError;
use thiserror::Error;

/// Error types for the httpsrv library
#[derive(Error, Debug)]
pub enum HttpError {
    /// Transport-related errors (bind, connect, read, write)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Request decoding errors (malformed request line, non-UTF-8 buffer)
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Timeout errors
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// UTF-8 encoding errors
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type for the httpsrv library
pub type Result<T> = std::result::Result<T, HttpError>;

pub mod client;
pub mod common;
pub mod http;
pub mod routing;
pub mod server;

// Re-export main types for convenience
pub use client::{ClientConfig, HttpClient};
pub use http::{Request, Response, parse_body};
pub use routing::{Handler, RouteTable, RouteTableBuilder, Router};
pub use server::{HttpServer, ServerConfig, Session, SessionState};
