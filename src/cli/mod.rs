//! Command-line frontend
//!
//! Argument parsing, usage text, and the dispatch that turns a parsed
//! command line into an exit code.

pub mod args;
pub mod handler;
