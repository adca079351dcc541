//! Data transfer objects exchanged with API clients.
//!
//! Every type here is plain serde data using camelCase field names on the wire. Server-side
//! domain models convert into these at the controller boundary.

pub mod api;
pub mod booking;
pub mod schedule;
pub mod user;
pub mod validate;
