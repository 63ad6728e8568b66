use crate::http::{Request, Response};
use crate::routing::Router;
use crate::{HttpError, Result};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

/// Lifecycle of one accepted connection.
///
/// The happy path is `AwaitingData → Dispatching → Responded → Closed`;
/// a transport fault from any state goes through `Errored` before the
/// handle is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Transport open, no data received yet
    AwaitingData,
    /// First data arrived; decoding and routing in progress
    Dispatching,
    /// Handler finished; response bytes being written
    Responded,
    /// A transport error occurred
    Errored,
    /// Transport handle released
    Closed,
}

/// One request/response exchange over an accepted transport connection.
///
/// The session owns the stream end-to-end: it performs the single read,
/// decodes it, consults the router, writes the encoded response, and closes
/// the transport. Only the first data event is processed; one request per
/// connection is the designed invariant, so anything the peer sends after
/// the first read is never looked at.
///
/// Generic over the stream so tests can drive the state machine through
/// `tokio::io::duplex` instead of a live socket.
pub struct Session<S> {
    stream: S,
    state: SessionState,
    buffer_size: usize,
}

impl<S: AsyncRead + AsyncWrite + Unpin> Session<S> {
    pub fn new(stream: S, buffer_size: usize) -> Self {
        Self {
            stream,
            state: SessionState::AwaitingData,
            buffer_size,
        }
    }

    /// Current state, observable without a live socket
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Waits for the first data event and produces the response for it.
    ///
    /// Returns `None` when the peer closes the connection without sending
    /// anything. A buffer that cannot be decoded yields the 400 default
    /// response rather than an error; only transport faults propagate.
    pub async fn dispatch(&mut self, router: &Router) -> Result<Option<Response>> {
        let mut buffer = vec![0u8; self.buffer_size];

        let n = match self.stream.read(&mut buffer).await {
            Ok(n) => n,
            Err(err) => return Err(self.fail(err)),
        };

        if n == 0 {
            // End signal before any data: nothing to dispatch
            self.state = SessionState::Closed;
            return Ok(None);
        }

        self.state = SessionState::Dispatching;

        let response = match Request::parse(&buffer[..n]) {
            Ok(request) => router.dispatch(&request),
            Err(err) => {
                debug!(error = %err, "Failed to decode request");
                Response::bad_request()
            }
        };

        Ok(Some(response))
    }

    /// Encodes and writes the response, then closes the transport.
    ///
    /// Every response terminates its connection; there is no reuse.
    pub async fn respond(&mut self, response: &Response) -> Result<()> {
        self.state = SessionState::Responded;

        let wire = response.to_bytes();
        if let Err(err) = self.stream.write_all(&wire).await {
            return Err(self.fail(err));
        }
        if let Err(err) = self.stream.flush().await {
            return Err(self.fail(err));
        }

        // Half-close failures at this point are indistinguishable from the
        // peer hanging up first; the exchange is already complete.
        let _ = self.stream.shutdown().await;
        self.state = SessionState::Closed;
        Ok(())
    }

    /// Explicit end signal: releases the transport from whatever state the
    /// session is in.
    pub async fn close(&mut self) {
        let _ = self.stream.shutdown().await;
        self.state = SessionState::Closed;
    }

    fn fail(&mut self, err: std::io::Error) -> HttpError {
        self.state = SessionState::Errored;
        HttpError::Io(err)
    }
}
