use std::io;

use kiln_ir::SpanError;

/// Failures of the driver itself, as opposed to diagnostics in the input.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Io { path: String, source: io::Error },

    #[error("'{path}' is too large: {source}")]
    TooLarge { path: String, source: SpanError },

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("invalid flag '{0}'")]
    InvalidFlag(String),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("missing file path")]
    MissingPath,
}

impl DriverError {
    pub(crate) fn from_io(path: &str, source: io::Error) -> Self {
        let path = path.to_string();
        match source.kind() {
            io::ErrorKind::NotFound => DriverError::NotFound { path },
            io::ErrorKind::InvalidData => DriverError::InvalidUtf8 { path },
            _ => DriverError::Io { path, source },
        }
    }
}
