use thiserror::Error;

/// Errors raised while reading a hub network file.
///
/// Line numbers are 1-based and refer to the physical line in the input.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("could not read network: {0}")]
    Io(#[from] std::io::Error),

    #[error("network is empty, expected a hub count")]
    MissingCount,

    #[error("line {line}: expected a hub count, found `{value}`")]
    InvalidCount { line: usize, value: String },

    #[error("expected {expected} hub definitions, found {found}")]
    MissingHubs { expected: usize, found: usize },

    #[error("line {line}: expected `<name> <x> <y>`, found `{content}`")]
    InvalidHub { line: usize, content: String },

    #[error("line {line}: `{value}` is not an integer coordinate")]
    InvalidCoordinate { line: usize, value: String },

    #[error("line {line}: expected `<name>-<name>`, found `{content}`")]
    InvalidLink { line: usize, content: String },
}
