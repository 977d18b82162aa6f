use crate::view_model::StatusView;

/// Lifecycle of the single watch: one scan at a time, ending in exactly
/// one terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatchPhase {
    #[default]
    Idle,
    Scanning,
    Found,
    Cancelled,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    phase: WatchPhase,
    delay_secs: u64,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            phase: WatchPhase::Idle,
            delay_secs: 60,
        }
    }
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> WatchPhase {
        self.phase
    }

    pub fn delay_secs(&self) -> u64 {
        self.delay_secs
    }

    pub fn view(&self) -> StatusView {
        StatusView {
            running: self.phase == WatchPhase::Scanning,
            delay_secs: self.delay_secs,
        }
    }

    pub(crate) fn begin_scan(&mut self, delay_secs: u64) {
        self.phase = WatchPhase::Scanning;
        self.delay_secs = delay_secs;
    }

    pub(crate) fn set_phase(&mut self, phase: WatchPhase) {
        self.phase = phase;
    }
}
