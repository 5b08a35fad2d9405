//! Configuration module
//!
//! Settings loaded from the user's config file, with environment overrides.

pub mod config;
