//! Server infrastructure module.
//!
//! This module provides:
//! - Router bootstrap with OpenAPI documentation and the common middleware
//!   stack (tracing, timeout, compression, CORS, 404 fallback)
//! - Serving with graceful shutdown

pub mod app;
pub mod shutdown;

pub use app::{create_app, create_router};
pub use shutdown::shutdown_signal;
