//! Quiz API.
//!
//! Exposes the generation and grading pipeline as HTTP endpoints for
//! the web frontend. Routes are nested under `/api/`.
//!
//! The router is composable — `api_router()` returns a `Router` that
//! can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod types;
