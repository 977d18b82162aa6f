use thiserror::Error;

/// Everything that can end a scan early. All variants are fatal except
/// `StoppedByUser`, which is the expected user-initiated termination.
/// Structural mismatches are never retried: a page whose layout deviates
/// from the expected shape will not self-correct.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WatchError {
    #[error("page container missing")]
    ContainerNotFound,
    #[error("could not find {0}")]
    NotFound(String),
    #[error("expected exactly one {what}, found {count}")]
    AmbiguousElement { what: String, count: usize },
    #[error("expected page structure missing: {0}")]
    StructureNotFound(String),
    #[error("could not parse {0}")]
    ParseError(String),
    #[error("frame content document unreachable")]
    NoDocument,
    #[error("stopped by user")]
    StoppedByUser,
}

impl WatchError {
    /// Stable taxonomy tag carried in the terminal report.
    pub fn kind(&self) -> &'static str {
        match self {
            WatchError::ContainerNotFound => "ContainerNotFound",
            WatchError::NotFound(_) => "NotFound",
            WatchError::AmbiguousElement { .. } => "AmbiguousElement",
            WatchError::StructureNotFound(_) => "StructureNotFound",
            WatchError::ParseError(_) => "ParseError",
            WatchError::NoDocument => "NoDocument",
            WatchError::StoppedByUser => "StoppedByUser",
        }
    }

    /// `StoppedByUser` is informational; everything else is a failure.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, WatchError::StoppedByUser)
    }
}
