//! Shared helpers used across the httpsrv library and its test suites

pub mod test_utils;

pub use test_utils::spawn_test_server;
