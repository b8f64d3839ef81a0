//! HTTP interface module.
//!
//! Provides REST API endpoints for:
//! - Collection search
//! - Question answering over the catalogue
//! - Health checks and monitoring

pub mod handlers;
pub mod routes;

pub(crate) mod monitoring;

#[cfg(test)]
pub(crate) mod test_support;
