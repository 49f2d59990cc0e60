//! HTTP/JSON transport for the taxprep API.
//! Serves license, certificate and badge routes behind a bearer-token gate.

pub mod auth;
mod error;
mod handlers;
pub mod router;
pub mod server;

pub use auth::{check_bearer, AuthDecision};
pub use error::{ApiError, HttpTransportError};
pub use router::{build_router, AppState};
pub use server::HttpServer;
