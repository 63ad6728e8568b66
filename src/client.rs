//! A small raw-bytes HTTP client used by tests and examples
//!
//! The server closes every connection after one response, so the client's
//! framing is simply "write the request, read until EOF".

use crate::{HttpError, Result};
use bytes::BytesMut;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Configuration for [`HttpClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Read timeout for operations
    pub read_timeout: Duration,
    /// Write timeout for operations
    pub write_timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Buffer size for reading data
    pub buffer_size: usize,
    /// Maximum response size to prevent memory exhaustion
    pub max_response_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            read_timeout: Duration::from_secs(30),
            write_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            buffer_size: 1024,
            max_response_size: 10 * 1024 * 1024, // 10MB
        }
    }
}

/// One-shot HTTP client: sends the raw bytes of a single request and
/// collects the single response.
pub struct HttpClient {
    stream: TcpStream,
    config: ClientConfig,
}

impl HttpClient {
    /// Connect to a server with custom configuration
    pub async fn connect_with_config(addr: SocketAddr, config: ClientConfig) -> Result<Self> {
        let stream = timeout(config.connect_timeout, TcpStream::connect(addr))
            .await
            .map_err(|_| HttpError::Timeout("Connection timeout".to_string()))??;

        Ok(Self { stream, config })
    }

    /// Connect with default configuration
    pub async fn connect(addr: SocketAddr) -> Result<Self> {
        Self::connect_with_config(addr, ClientConfig::default()).await
    }

    /// Writes one raw request and reads the response until the server
    /// closes the connection.
    pub async fn send(&mut self, request: &[u8]) -> Result<Vec<u8>> {
        timeout(self.config.write_timeout, self.stream.write_all(request))
            .await
            .map_err(|_| HttpError::Timeout("Write timeout".to_string()))??;
        timeout(self.config.write_timeout, self.stream.flush())
            .await
            .map_err(|_| HttpError::Timeout("Flush timeout".to_string()))??;

        let mut response = BytesMut::with_capacity(self.config.buffer_size);
        let mut buffer = vec![0u8; self.config.buffer_size];

        loop {
            let n = timeout(self.config.read_timeout, self.stream.read(&mut buffer))
                .await
                .map_err(|_| HttpError::Timeout("Read timeout".to_string()))??;

            if n == 0 {
                // Server closed the connection: the response is complete
                break;
            }

            if response.len() + n > self.config.max_response_size {
                return Err(HttpError::Config(format!(
                    "Response too large: {} bytes, max allowed: {}",
                    response.len() + n,
                    self.config.max_response_size
                )));
            }

            response.extend_from_slice(&buffer[..n]);
        }

        Ok(response.to_vec())
    }

    /// Sends a request given as a string and returns the response as a string
    pub async fn send_string(&mut self, request: &str) -> Result<String> {
        let response = self.send(request.as_bytes()).await?;
        String::from_utf8(response).map_err(HttpError::Utf8)
    }

    /// Get client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.read_timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.buffer_size, 1024);
        assert_eq!(config.max_response_size, 10 * 1024 * 1024);
    }

    #[tokio::test]
    async fn test_connect_timeout_configuration() {
        let config = ClientConfig {
            connect_timeout: Duration::from_millis(100),
            ..Default::default()
        };
        assert_eq!(config.connect_timeout, Duration::from_millis(100));
    }
}
