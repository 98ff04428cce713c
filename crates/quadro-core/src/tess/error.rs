use std::fmt;

/// Rejected tessellation parameter.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TessError {
    /// Circle and arc generators need at least one segment.
    InvalidSegmentCount { segments: u32 },
}

impl fmt::Display for TessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TessError::InvalidSegmentCount { segments } => {
                write!(f, "segment count {segments} is invalid, curved shapes need at least 1")
            }
        }
    }
}

impl std::error::Error for TessError {}
