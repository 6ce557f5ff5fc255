//! Error types for the store, the command loop and configuration.

use rustyline::error::ReadlineError;
use thiserror::Error;

/// Outcome of a failed store lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No entry exists for the key (a cache miss)
    #[error("Key {key} not found in cache")]
    NotFound { key: String },
}

/// Failure of the line source itself, as opposed to end-of-input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input")]
    Io(#[from] std::io::Error),

    #[error("failed to read input")]
    Readline(#[from] ReadlineError),
}

/// Conditions that stop the command loop with an error status.
#[derive(Debug, Error)]
pub enum ReplError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("failed to write reply")]
    Output(#[source] std::io::Error),
}

/// Errors while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}'")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = StoreError::NotFound {
            key: "missing".to_string(),
        };
        assert_eq!(err.to_string(), "Key missing not found in cache");
    }

    #[test]
    fn test_input_error_is_transparent_in_repl_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = ReplError::from(InputError::from(io));
        assert_eq!(err.to_string(), "failed to read input");

        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "pipe closed");
        assert!(std::error::Error::source(source).is_none());
    }

    #[test]
    fn test_cause_is_reported_once() {
        let err = ConfigError::Read {
            path: "absent.toml".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let report = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(
            report,
            "failed to read config file 'absent.toml': no such file"
        );
    }
}
