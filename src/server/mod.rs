//! HTTP surface for the dashboard state

mod error;
pub mod http_server;

pub use error::EndpointError;
pub use http_server::{open_store, router, start_server, AppState};
