//! Request guards and cookie handling.

pub mod auth;
pub mod session;
