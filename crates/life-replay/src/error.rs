//! Error types for frame I/O.

use std::fmt;
use std::io;

use life_core::GridError;

/// Errors that can occur while writing or reading frame streams.
#[derive(Debug)]
pub enum ReplayError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// A frame block could not be parsed.
    MalformedFrame {
        /// 1-based line number where parsing failed.
        line: usize,
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// A frame's rows were not a valid grid.
    Grid {
        /// Step number from the frame header.
        step: u64,
        /// The underlying grid error.
        source: GridError,
    },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::MalformedFrame { line, detail } => {
                write!(f, "malformed frame at line {line}: {detail}")
            }
            Self::Grid { step, source } => write!(f, "invalid grid in frame {step}: {source}"),
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Grid { source, .. } => Some(source),
            Self::MalformedFrame { .. } => None,
        }
    }
}

impl From<io::Error> for ReplayError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
