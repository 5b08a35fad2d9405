//! btc-info library
//!
//! Looks up public metadata for a Bitcoin address through the Blockstream
//! Esplora API, prints it, and optionally saves the raw JSON.
//!
//! # Example
//!
//! ```no_run
//! use btc_info::api_client::BlockstreamClient;
//! use btc_info::fetcher::{fetch_address_info, AddressQuery};
//! use std::time::Duration;
//!
//! let client = BlockstreamClient::new(
//!     "https://blockstream.info/api",
//!     Some(Duration::from_secs(30)),
//! ).unwrap();
//! let query = AddressQuery::new("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", None, true).unwrap();
//! let outcome = fetch_address_info(&client, &query, &mut std::io::stdout()).unwrap();
//! println!("{} fields", outcome.info.len());
//! ```

pub mod api_client;
pub mod banner;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod help_text;
pub mod utils;

pub use error::FetchError;
