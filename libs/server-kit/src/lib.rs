//! Shared service plumbing
//!
//! Both books services are a GraphQL schema behind the same HTTP surface:
//! `POST /graphql`, a GraphiQL page on `GET /graphql` and `GET /health`.
//! This crate owns that surface plus configuration loading, logging
//! setup and the serve loop.

pub mod config;
pub mod error;
pub mod graphql;
pub mod logging;
pub mod router;
pub mod server;

pub use error::AppError;
