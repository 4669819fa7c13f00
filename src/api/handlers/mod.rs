//! HTTP request handlers.

pub mod earthquake_handler;

pub use earthquake_handler::earthquake_routes;
