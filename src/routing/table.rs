use crate::http::{Request, Response};
use std::collections::HashMap;
use std::sync::Arc;

/// A route handler: a pure function from a decoded request to a response
pub type Handler = Arc<dyn Fn(&Request) -> Response + Send + Sync>;

/// Accumulates route registrations before the server starts.
///
/// Methods are stored upper-cased; paths are stored exactly. Registering a
/// second handler for the same (method, path) pair silently overwrites the
/// first (last registration wins).
///
/// # Examples
///
/// ```
/// use httpsrv::{Response, RouteTableBuilder};
///
/// let table = RouteTableBuilder::new()
///     .route("GET", "/", |_req| Response::new(200, "text/plain", "home"))
///     .route("post", "/submit", |_req| Response::new(200, "text/plain", "ok"))
///     .build();
///
/// assert!(table.lookup("GET", "/").is_some());
/// assert!(table.lookup("POST", "/submit").is_some());
/// assert!(table.lookup("GET", "/missing").is_none());
/// ```
#[derive(Default)]
pub struct RouteTableBuilder {
    routes: HashMap<(String, String), Handler>,
}

impl RouteTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under the upper-cased method and the exact path
    pub fn route(
        mut self,
        method: &str,
        path: &str,
        handler: impl Fn(&Request) -> Response + Send + Sync + 'static,
    ) -> Self {
        self.routes.insert(
            (method.to_ascii_uppercase(), path.to_string()),
            Arc::new(handler),
        );
        self
    }

    /// Finalizes the table. The result carries no mutation methods, so
    /// read-only-after-startup holds by construction.
    pub fn build(self) -> RouteTable {
        RouteTable {
            routes: self.routes,
        }
    }
}

/// The immutable (method, path) → handler mapping consulted on dispatch.
///
/// Shared read-only across all connection tasks; no lock is needed.
pub struct RouteTable {
    routes: HashMap<(String, String), Handler>,
}

impl RouteTable {
    /// Looks up an exact route: the method matches case-insensitively, the
    /// path byte-for-byte. There is no wildcard, prefix, or parameterized
    /// matching.
    pub fn lookup(&self, method: &str, path: &str) -> Option<&Handler> {
        self.routes
            .get(&(method.to_ascii_uppercase(), path.to_string()))
    }

    /// Number of registered routes
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
