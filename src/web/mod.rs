//! JSON HTTP API over the shortest path engine.

pub mod api;
pub mod models;
pub mod server;

pub use server::{build_app, start_server, ServerConfig};
