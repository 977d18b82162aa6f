use crate::{ControlState, Effect, Msg, Report, ScanOutcome, WatchPhase};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ControlState, msg: Msg) -> (ControlState, Vec<Effect>) {
    let effects = match msg {
        Msg::StartRequested { delay_secs } => {
            // Single-instance invariant: a start while a scan is active is
            // ignored, never queued.
            if state.phase() == WatchPhase::Scanning {
                return (state, Vec::new());
            }
            state.begin_scan(delay_secs);
            vec![Effect::BeginScan { delay_secs }]
        }
        Msg::StopRequested => {
            if state.phase() == WatchPhase::Scanning {
                // Phase stays Scanning until the scan itself reports
                // Cancelled from its checkpoint.
                vec![Effect::HaltScan]
            } else {
                Vec::new()
            }
        }
        Msg::ScanFinished { outcome } => {
            let (phase, report) = match outcome {
                ScanOutcome::Found(groups) => (WatchPhase::Found, Report::Available(groups)),
                ScanOutcome::Cancelled => (WatchPhase::Cancelled, Report::Stopped),
                ScanOutcome::Failed { kind, message } => {
                    (WatchPhase::Failed, Report::Failure { kind, message })
                }
            };
            state.set_phase(phase);
            vec![Effect::Report(report)]
        }
    };

    (state, effects)
}
