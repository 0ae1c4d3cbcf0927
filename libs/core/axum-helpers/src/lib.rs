//! # Axum Helpers
//!
//! Utilities and middleware shared by the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Custom extractors (integer path id, validated JSON)
//! - **[`server`]**: Router/app setup, health endpoint, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod server;

// Re-export error types
pub use errors::{violation_messages, AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{IdPath, ValidatedJson};

// Re-export server types
pub use server::{create_app, create_router, health_router, shutdown_signal, HealthResponse};
