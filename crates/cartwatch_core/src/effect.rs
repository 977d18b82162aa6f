use crate::ItemGroup;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Spawn the polling scan with the given inter-iteration delay.
    BeginScan { delay_secs: u64 },
    /// Lower the shared running flag; the scan observes it at its next
    /// checkpoint, never mid-step.
    HaltScan,
    /// Deliver the terminal outcome to the result reporter.
    Report(Report),
}

/// Terminal report payload handed across the reporter boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Groups whose primary section opened, in table row order.
    Available(Vec<ItemGroup>),
    /// A fatal structural or navigation failure; never retried.
    Failure { kind: String, message: String },
    /// User-initiated stop. Informational, not an error.
    Stopped,
}
