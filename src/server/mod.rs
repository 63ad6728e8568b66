//! Transport glue: the TCP accept loop and the per-connection session
//!
//! Each accepted connection gets its own task and its own [`Session`];
//! sessions share nothing but the read-only router.

pub mod config;
pub mod server;
pub mod session;

#[cfg(test)]
mod tests;

pub use config::ServerConfig;
pub use server::HttpServer;
pub use session::{Session, SessionState};
