use std::path::PathBuf;
use thiserror::Error;

/// Failures that can happen while looking up an address
#[derive(Debug, Error)]
pub enum FetchError {
    /// No address (or an empty one) was given on the command line
    #[error("no BTC address provided")]
    MissingAddress,

    /// An address that cannot be sent as a single URL path segment
    #[error("cannot look up address {address:?}: {reason}")]
    UnaddressableInput { address: String, reason: String },

    /// The explorer answered with something other than 200
    #[error("explorer returned HTTP {status}")]
    Remote { status: u16 },

    /// 200 response whose body is not a JSON object
    #[error("invalid response body: {reason}")]
    InvalidResponse { reason: String },

    /// DNS failure, refused connection, timeout
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("could not write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Result could not be printed (closed stdout, broken pipe)
    #[error("could not print result: {0}")]
    Stdout(#[source] std::io::Error),

    /// The configured API root is not a usable base URL
    #[error("invalid API base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

pub type Result<T> = std::result::Result<T, FetchError>;

impl FetchError {
    /// Map errors to stable process exit codes.
    ///
    ///  1 - Missing or unaddressable address
    ///  2 - (reserved for command-line usage errors)
    ///  3 - Transport failure
    ///  4 - Output file or stdout could not be written
    ///  5 - Configuration error (including an unusable base URL)
    ///  6 - Remote error (non-200 or unusable body)
    pub fn exit_code(&self) -> i32 {
        match self {
            FetchError::MissingAddress | FetchError::UnaddressableInput { .. } => 1,
            FetchError::Transport { .. } => 3,
            FetchError::OutputWrite { .. } | FetchError::Stdout(_) => 4,
            FetchError::InvalidBaseUrl { .. } => CONFIG_EXIT_CODE,
            FetchError::Remote { .. } | FetchError::InvalidResponse { .. } => REMOTE_EXIT_CODE,
        }
    }

    /// True when the explorer itself reported the failure
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            FetchError::Remote { .. } | FetchError::InvalidResponse { .. }
        )
    }
}

/// Exit code used when the configuration cannot be loaded or written
pub const CONFIG_EXIT_CODE: i32 = 5;

/// Exit code used when the explorer rejects or garbles the lookup
pub const REMOTE_EXIT_CODE: i32 = 6;

/// Exit code clap uses for invalid command lines
pub const USAGE_EXIT_CODE: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_category() {
        let transport = FetchError::Transport {
            url: "https://example.invalid".to_string(),
            source: Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "refused",
            )),
        };
        let write = FetchError::OutputWrite {
            path: PathBuf::from("/nonexistent/out.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };

        assert_eq!(FetchError::MissingAddress.exit_code(), 1);
        assert_eq!(FetchError::Remote { status: 404 }.exit_code(), 6);
        assert_eq!(
            FetchError::InvalidResponse {
                reason: "not an object".to_string()
            }
            .exit_code(),
            6
        );
        assert_eq!(transport.exit_code(), 3);
        assert_eq!(write.exit_code(), 4);
        assert_eq!(
            FetchError::Stdout(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "closed"
            ))
            .exit_code(),
            4
        );
        assert_eq!(
            FetchError::InvalidBaseUrl {
                url: "not a url".to_string(),
                reason: "relative URL without a base".to_string()
            }
            .exit_code(),
            5
        );
    }

    #[test]
    fn test_remote_code_differs_from_usage_code() {
        assert_ne!(
            FetchError::Remote { status: 400 }.exit_code(),
            USAGE_EXIT_CODE
        );
    }

    #[test]
    fn test_remote_classification() {
        assert!(FetchError::Remote { status: 500 }.is_remote());
        assert!(!FetchError::MissingAddress.is_remote());
    }

    #[test]
    fn test_display_includes_status() {
        let err = FetchError::Remote { status: 400 };
        assert_eq!(err.to_string(), "explorer returned HTTP 400");
    }
}
