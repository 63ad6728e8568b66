use super::table::RouteTable;
use crate::http::{Request, Response};
use std::panic::{AssertUnwindSafe, catch_unwind};
use tracing::error;

/// Dispatches decoded requests through a [`RouteTable`].
pub struct Router {
    table: RouteTable,
}

impl Router {
    pub fn new(table: RouteTable) -> Self {
        Self { table }
    }

    /// The table this router consults
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Resolves a request to a response.
    ///
    /// The method is upper-cased for the lookup; the path must match
    /// byte-for-byte. An unroutable pair yields the 404 default response.
    /// An unmatched method and an unmatched path are indistinguishable
    /// here: both are 404, never 405.
    ///
    /// A handler that panics is caught and converted into the 500 default
    /// response, so a faulty handler cannot take the listener down.
    pub fn dispatch(&self, request: &Request) -> Response {
        match self.table.lookup(&request.method, &request.path) {
            Some(handler) => match catch_unwind(AssertUnwindSafe(|| handler(request))) {
                Ok(response) => response,
                Err(_) => {
                    error!(method = %request.method, path = %request.path, "Handler panicked");
                    Response::internal_error()
                }
            },
            None => Response::not_found(),
        }
    }
}
