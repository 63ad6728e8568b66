//! HTTP/1.1 message syntax
//!
//! This module holds all of the crate's protocol knowledge: decoding one
//! transport read into a structured request, encoding a structured response
//! into wire bytes, and decoding URL-encoded form bodies.

pub mod form;
pub mod request;
pub mod response;


pub use form::parse_body;
pub use request::{DecodeError, Request};
pub use response::Response;
