use std::collections::HashMap;

/// A decoded HTTP/1.1 request
///
/// Built once per connection from the bytes of a single transport read and
/// immutable afterwards. Header names are kept exactly as received, without
/// case normalization, and `path` is the exact byte sequence from the
/// request line (no percent-decoding, no query-string handling).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Request method token, as received (not case-folded)
    pub method: String,
    /// Request target, byte-for-byte from the request line
    pub path: String,
    /// Header name/value pairs, keys verbatim
    pub headers: HashMap<String, String>,
    /// Raw message body, empty when the request has none
    pub body: String,
}

/// Errors produced while decoding a request buffer
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The request line is missing its method or path token
    #[error("Malformed request line: {0:?}")]
    MalformedRequestLine(String),

    /// The buffer is not valid UTF-8
    #[error("Request is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

impl Request {
    /// Decodes the raw bytes of one transport read into a `Request`.
    ///
    /// The buffer is split on the first blank line (`\r\n\r\n`) into a head
    /// section and a verbatim body; a buffer without the delimiter is all
    /// head and yields an empty body. The first head line is the request
    /// line (`METHOD SP PATH [SP VERSION]`, the version token is
    /// discarded); remaining head lines are split on the first `": "` into
    /// a header entry, and lines without that separator are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use httpsrv::http::Request;
    ///
    /// let req = Request::parse(b"GET /index HTTP/1.1\r\nHost: localhost\r\n\r\n").unwrap();
    /// assert_eq!(req.method, "GET");
    /// assert_eq!(req.path, "/index");
    /// assert_eq!(req.headers["Host"], "localhost");
    /// assert_eq!(req.body, "");
    /// ```
    pub fn parse(raw: &[u8]) -> std::result::Result<Self, DecodeError> {
        let text = std::str::from_utf8(raw)?;

        let (head, body) = match text.split_once("\r\n\r\n") {
            Some((head, body)) => (head, body),
            None => (text, ""),
        };

        let mut lines = head.split("\r\n");
        let request_line = lines.next().unwrap_or("");

        let mut tokens = request_line.splitn(3, ' ');
        let method = tokens.next().unwrap_or("");
        let path = tokens.next().unwrap_or("");
        // A third token is the protocol version; it is not retained.

        if method.is_empty() || path.is_empty() {
            return Err(DecodeError::MalformedRequestLine(request_line.to_string()));
        }

        let mut headers = HashMap::new();
        for line in lines {
            match line.split_once(": ") {
                Some((name, value)) => {
                    headers.insert(name.to_string(), value.to_string());
                }
                None => continue,
            }
        }

        Ok(Request {
            method: method.to_string(),
            path: path.to_string(),
            headers,
            body: body.to_string(),
        })
    }
}
