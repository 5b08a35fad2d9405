//! Address lookup: one request, then print and optionally persist the result.

use crate::api_client::AddressSource;
use crate::error::{FetchError, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const SUCCESS_MESSAGE: &str = "BTC information retrieved successfully.";
pub const FAILURE_MESSAGE: &str = "Error occurred while retrieving BTC information.";

/// Opaque explorer document, key order preserved as received
pub type AddressInfo = Map<String, Value>;

/// What the user asked for on this invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressQuery {
    pub address: String,
    pub output_path: Option<PathBuf>,
    pub verbose: bool,
}

impl AddressQuery {
    /// Returns `MissingAddress` for an empty address.
    pub fn new(address: &str, output_path: Option<PathBuf>, verbose: bool) -> Result<Self> {
        if address.is_empty() {
            return Err(FetchError::MissingAddress);
        }
        Ok(Self {
            address: address.to_string(),
            output_path,
            verbose,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub info: AddressInfo,
    pub written_to: Option<PathBuf>,
}

/// Look up `query.address` and report on `out`.
///
/// On a non-200 answer the fixed failure message is written and nothing
/// touches the filesystem. Write failures on the output file surface as
/// `OutputWrite`; in verbose mode the JSON is the result, so failing to
/// print it surfaces as `Stdout`.
pub fn fetch_address_info(
    source: &dyn AddressSource,
    query: &AddressQuery,
    out: &mut dyn Write,
) -> Result<FetchOutcome> {
    let response = match source.get_address(&query.address) {
        Ok(response) => response,
        Err(e) => {
            if e.is_remote() {
                print_line(out, FAILURE_MESSAGE);
            }
            return Err(e);
        }
    };

    if response.status != 200 {
        warn!(target: "fetcher", "Lookup of {} returned HTTP {}", query.address, response.status);
        print_line(out, FAILURE_MESSAGE);
        return Err(FetchError::Remote {
            status: response.status,
        });
    }

    let info = match parse_address_info(&response.body) {
        Ok(info) => info,
        Err(e) => {
            print_line(out, FAILURE_MESSAGE);
            return Err(e);
        }
    };

    if let Some(path) = &query.output_path {
        write_output(path, &info)?;
        info!(target: "fetcher", "Saved result to {}", path.display());
    }

    if query.verbose {
        emit_json(out, &to_pretty_json(&info)?)?;
    } else {
        print_line(out, SUCCESS_MESSAGE);
    }

    info!(target: "fetcher", "Retrieved {} ({} fields)", query.address, info.len());
    Ok(FetchOutcome {
        info,
        written_to: query.output_path.clone(),
    })
}

/// Parse a response body, requiring a JSON object at the top level.
pub fn parse_address_info(body: &str) -> Result<AddressInfo> {
    let value: Value = serde_json::from_str(body).map_err(|e| FetchError::InvalidResponse {
        reason: e.to_string(),
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(FetchError::InvalidResponse {
            reason: format!("expected a JSON object, got {}", json_kind(&other)),
        }),
    }
}

/// Pretty-print with 4-space indentation.
pub fn to_pretty_json(info: &AddressInfo) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    info.serialize(&mut ser)
        .map_err(|e| FetchError::InvalidResponse {
            reason: e.to_string(),
        })?;
    String::from_utf8(buf).map_err(|e| FetchError::InvalidResponse {
        reason: e.to_string(),
    })
}

/// Write compact JSON to `path`, creating or truncating it.
pub fn write_output(path: &Path, info: &AddressInfo) -> Result<()> {
    let write_err = |source: std::io::Error| FetchError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, info).map_err(|e| write_err(e.into()))?;
    writer.flush().map_err(write_err)?;
    Ok(())
}

// Status lines only; losing one is not worth failing the lookup over
fn print_line(out: &mut dyn Write, line: &str) {
    let _ = writeln!(out, "{}", line);
}

fn emit_json(out: &mut dyn Write, json: &str) -> Result<()> {
    writeln!(out, "{}", json)
        .and_then(|_| out.flush())
        .map_err(FetchError::Stdout)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_address_rejected() {
        let err = AddressQuery::new("", None, false).unwrap_err();
        assert!(matches!(err, FetchError::MissingAddress));
    }

    #[test]
    fn test_parse_rejects_non_object() {
        let err = parse_address_info("[1, 2, 3]").unwrap_err();
        match err {
            FetchError::InvalidResponse { reason } => assert!(reason.contains("an array")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_address_info("Invalid Bitcoin address"),
            Err(FetchError::InvalidResponse { .. })
        ));
    }

    #[test]
    fn test_pretty_json_uses_four_spaces() {
        let info = parse_address_info(r#"{"address":"X","chain_stats":{"tx_count":2}}"#).unwrap();
        let pretty = to_pretty_json(&info).unwrap();
        assert_eq!(
            pretty,
            "{\n    \"address\": \"X\",\n    \"chain_stats\": {\n        \"tx_count\": 2\n    }\n}"
        );
    }

    #[test]
    fn test_pretty_json_keeps_key_order() {
        let info = parse_address_info(r#"{"zeta":1,"alpha":2}"#).unwrap();
        let pretty = to_pretty_json(&info).unwrap();
        assert!(pretty.find("zeta").unwrap() < pretty.find("alpha").unwrap());
    }
}
