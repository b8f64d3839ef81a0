//! # AskSG API
//!
//! HTTP interface for collection search.
//!
//! - `POST /search`: ranked collections for a question
//! - `POST /ask`: plain-text answer listing the best collections
//! - `GET /health`, `GET /ready`: monitoring

pub mod error;
pub mod http;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use http::handlers::{AskRequest, AskResponse, SearchRequest};
pub use http::routes::create_router;
pub use server::{InterfaceConfig, InterfaceServer};
pub use state::AppState;
