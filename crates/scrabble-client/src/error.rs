use std::{io, path::PathBuf};

/// Errors returned by [`ScrabbleClient`](crate::ScrabbleClient) implementations.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ClientError {
    /// A file could not be read.
    #[display("failed to read {}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// A file did not contain the expected JSON.
    #[display("failed to parse {}", path.display())]
    Json {
        /// The file being parsed.
        path: PathBuf,
        /// The underlying parse error.
        source: serde_json::Error,
    },
    /// No level with the given name exists.
    #[display("unknown level {level:?}")]
    UnknownLevel {
        /// The requested level name.
        #[error(not(source))]
        level: String,
    },
}
