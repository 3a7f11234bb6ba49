//! # Cyber Range Dev Server Library
//!
//! Development server for the Cyber Range browser shooter.
//!
//! ## Features
//!
//! - **Score Ingest**: HTTP endpoint persisting score submissions to an append-only CSV log
//! - **Static Assets**: serves the game's scripts, stylesheets and 3D models
//! - **Frontend Redirect**: sends the root path to the frontend dev origin
//! - **Open CORS**: permissive cross-origin policy on every response
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cyber_range::servers::{WebServer, WebConfig};
//!
//! # async fn run() -> cyber_range::Result<()> {
//! WebServer::new(WebConfig::default()).start().await
//! # }
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Score records and the append-only CSV log
pub mod scores;

/// HTTP server components (router, handlers, CORS layer)
pub mod servers;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use scores::{ScoreLog, ScoreRecord, ScoreValue};
pub use servers::{WebConfig, WebServer};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the Cyber Range dev server
#[derive(Debug, thiserror::Error)]
pub enum CyberRangeError {
    #[error("Server error: {0}")]
    Server(String),

    #[error("Score log error: {0}")]
    ScoreLog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CyberRangeError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
