//! Error types for grid scanning and FSC decoding.
//!
//! Two failure kinds exist. Precondition errors mean the caller handed the
//! core an unusable grid or header context; format errors mean FSC text
//! without its `FSC1` header. Everything else the decoder meets (short lines,
//! non-numeric fields, foreign ids) is repaired in place and never surfaces.

use thiserror::Error;

/// Coarse classification of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The core was called without a valid grid/state context.
    Precondition,
    /// FSC text is not an FSC document.
    Format,
}

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("grid buffer holds {len} cells but {cols}x{rows} were declared")]
    GridShape { cols: usize, rows: usize, len: usize },

    #[error("threshold {0} is not a finite number")]
    Threshold(f64),

    #[error("no '{field}' for the FSC header: pass it in the metadata or encode from a grid")]
    MissingMeta { field: &'static str },

    #[error("FSC header entry '{key}' contains a line break, ';' or '='")]
    HeaderValue { key: String },

    #[error("invalid FSC: missing FSC1 header")]
    MissingHeader,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::GridShape { .. }
            | Error::Threshold(_)
            | Error::MissingMeta { .. }
            | Error::HeaderValue { .. } => ErrorKind::Precondition,
            Error::MissingHeader => ErrorKind::Format,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(Error::MissingHeader.kind(), ErrorKind::Format);
        assert_eq!(Error::Threshold(f64::NAN).kind(), ErrorKind::Precondition);
        assert_eq!(
            Error::HeaderValue { key: "name".into() }.kind(),
            ErrorKind::Precondition
        );
        assert_eq!(
            Error::GridShape { cols: 2, rows: 2, len: 3 }.kind(),
            ErrorKind::Precondition
        );
    }

    #[test]
    fn test_header_message() {
        assert_eq!(
            Error::MissingHeader.to_string(),
            "invalid FSC: missing FSC1 header"
        );
    }
}
