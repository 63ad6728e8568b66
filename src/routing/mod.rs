//! Route registration and dispatch
//!
//! Routes are registered on a [`RouteTableBuilder`] during startup; the
//! built [`RouteTable`] is immutable, which is what lets every connection
//! task consult it without synchronization.

pub mod router;
pub mod table;


pub use router::Router;
pub use table::{Handler, RouteTable, RouteTableBuilder};
