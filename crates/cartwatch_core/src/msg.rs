use crate::ItemGroup;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Start control fired (popup, CLI, whatever hosts the watch).
    /// `delay_secs` is already clamped to >= 1 by the boundary.
    StartRequested { delay_secs: u64 },
    /// Stop control fired. Takes effect at the scan's next checkpoint.
    StopRequested,
    /// The scan task finished, one way or another.
    ScanFinished { outcome: ScanOutcome },
}

/// How a scan ended. Failures cross the pure boundary as taxonomy tag plus
/// message, the same shape the terminal report carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Found(Vec<ItemGroup>),
    Cancelled,
    Failed { kind: String, message: String },
}
