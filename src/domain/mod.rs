//! Domain layer for the server connection profile
//!
//! Settings, the immutable profile built from them, and the errors that
//! can occur while building it. No I/O happens here.

pub mod errors;
pub mod models;

pub use errors::{ProfileError, ProfileResult};
