// Modules for server components
pub mod cors;
pub mod web;

// Re-export public APIs
pub use cors::OpenCorsLayer;
pub use web::{WebConfig, WebServer};
