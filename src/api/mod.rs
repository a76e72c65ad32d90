//! HTTP API: router, endpoint handlers, error mapping, and server
//! lifecycle.
//!
//! Every response uses the `{ok, data?, error?}` envelope. The router
//! is composable — `api_router()` returns a `Router` that can be
//! mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::api_router;
pub use server::{start_api_server, ApiServer};
pub use types::ApiContext;
