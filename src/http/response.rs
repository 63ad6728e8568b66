/// An HTTP/1.1 response
///
/// Constructed by a handler and consumed exactly once by the wire encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Numeric status code
    pub status_code: u16,
    /// Value of the `Content-Type` header
    pub content_type: String,
    /// Response body
    pub body: String,
}

impl Response {
    /// Creates a response from its parts
    pub fn new(status_code: u16, content_type: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status_code,
            content_type: content_type.into(),
            body: body.into(),
        }
    }

    /// The default response for an unroutable (method, path) pair
    pub fn not_found() -> Self {
        Self::new(404, "text/plain", "Not Found")
    }

    /// The default response for a request that could not be decoded
    pub fn bad_request() -> Self {
        Self::new(400, "text/plain", "Bad Request")
    }

    /// The default response for a handler fault
    pub fn internal_error() -> Self {
        Self::new(500, "text/plain", "Internal Server Error")
    }

    /// Reason phrase for the status line.
    ///
    /// Deliberately coarse: `"OK"` for 200 and the literal `"Error"` for
    /// every other code, including the 2xx ones. 201 renders as
    /// `HTTP/1.1 201 Error` on the wire.
    pub fn reason(&self) -> &'static str {
        if self.status_code == 200 { "OK" } else { "Error" }
    }

    /// Serializes the response into its wire byte sequence.
    ///
    /// `Content-Length` is the UTF-8 byte length of the body. The caller is
    /// expected to close the transport after writing these bytes; there is
    /// no connection reuse.
    pub fn to_bytes(&self) -> Vec<u8> {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n{}",
            self.status_code,
            self.reason(),
            self.content_type,
            self.body.len(),
            self.body,
        )
        .into_bytes()
    }
}
