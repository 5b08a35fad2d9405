//! Utility functions and helpers
//!
//! Application paths and the file-backed tracing setup.

pub mod app_paths;
pub mod logging;
