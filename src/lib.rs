// Receipt Points - Core Library
// Exposes validation, scoring and storage for the CLI, API server, and tests

pub mod config;
pub mod receipt;
pub mod scoring;
pub mod store;
pub mod validation;

#[cfg(feature = "server")]
pub mod error;
#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use config::ServerConfig;
pub use receipt::{Item, Receipt};
pub use scoring::{breakdown, score, ScoreBreakdown};
pub use store::ScoreStore;
pub use validation::{validate, ValidationError};

#[cfg(feature = "server")]
pub use error::{ApiError, ApiResult};
#[cfg(feature = "server")]
pub use server::{build_router, AppState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
