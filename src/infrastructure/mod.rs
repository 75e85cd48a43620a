//! Infrastructure layer module
//!
//! I/O and external formats around the domain model:
//! - Configuration management (figment)
//! - Secret files
//! - Logging infrastructure
//! - Renderers for the formats the administration tool consumes

pub mod config;
pub mod credentials;
pub mod logging;
pub mod render;
