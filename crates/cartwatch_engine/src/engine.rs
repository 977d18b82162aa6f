use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use cartwatch_core::{update, ControlState, Effect, Msg, Report, ScanOutcome};
use watch_logging::{watch_error, watch_info, watch_warn};

use crate::dom::DomSurface;
use crate::extract::TableExtractor;
use crate::navigate::DomNavigator;
use crate::page::{NavigateSettings, PageModel};
use crate::poll::{PollHandle, PollingController};
use crate::types::WatchError;

#[derive(Debug, Clone, Default)]
pub struct WatchConfig {
    pub page: PageModel,
    pub navigate: NavigateSettings,
}

enum WatchCommand {
    Apply(Msg),
    Shutdown,
}

/// Status-query payload: the running flag plus the live count of
/// completed poll iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchStatus {
    pub running: bool,
    pub iterations: u64,
}

/// Front door of the engine: start/stop controls in, terminal reports out.
///
/// A background thread owns a tokio runtime and the control state; one
/// internal message channel multiplexes external commands with scan
/// completions, so every state transition goes through the pure update
/// function. At most one scan task exists at a time; a start while one is
/// active is ignored, never queued.
pub struct WatchHandle {
    cmd_tx: mpsc::Sender<WatchCommand>,
    event_rx: mpsc::Receiver<Report>,
    poll: PollHandle,
}

impl WatchHandle {
    pub fn new(dom: Arc<dyn DomSurface>, config: WatchConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let poll = PollHandle::new();

        let loop_tx = cmd_tx.clone();
        let loop_poll = poll.clone();
        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    watch_error!("could not start watch runtime: {err}");
                    return;
                }
            };

            let mut state = ControlState::new();
            while let Ok(command) = cmd_rx.recv() {
                let msg = match command {
                    WatchCommand::Apply(msg) => msg,
                    WatchCommand::Shutdown => break,
                };
                let (next, effects) = update(state, msg);
                state = next;
                for effect in effects {
                    run_effect(effect, &runtime, &dom, &config, &loop_poll, &loop_tx, &event_tx);
                }
            }
            // Cancels any in-flight scan without blocking this thread.
            runtime.shutdown_background();
        });

        Self {
            cmd_tx,
            event_rx,
            poll,
        }
    }

    /// Start control: begins a scan if idle, no-op while one is active.
    /// Clamps the delay to at least one second.
    pub fn start(&self, delay_secs: u64) {
        let _ = self.cmd_tx.send(WatchCommand::Apply(Msg::StartRequested {
            delay_secs: delay_secs.max(1),
        }));
    }

    /// Stop control: cooperative, observed at the scan's next checkpoint.
    pub fn stop(&self) {
        let _ = self.cmd_tx.send(WatchCommand::Apply(Msg::StopRequested));
    }

    pub fn status(&self) -> WatchStatus {
        WatchStatus {
            running: self.poll.is_running(),
            iterations: self.poll.iterations(),
        }
    }

    /// Non-blocking read of the next terminal report, if any.
    pub fn try_recv(&self) -> Option<Report> {
        self.event_rx.try_recv().ok()
    }

    /// Blocking read of the next terminal report, up to `timeout`.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<Report> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        // The control thread keeps a self-sender for scan completions, so
        // a disconnect alone never reaches it; tell it to wind down.
        let _ = self.cmd_tx.send(WatchCommand::Shutdown);
    }
}

fn run_effect(
    effect: Effect,
    runtime: &tokio::runtime::Runtime,
    dom: &Arc<dyn DomSurface>,
    config: &WatchConfig,
    poll: &PollHandle,
    cmd_tx: &mpsc::Sender<WatchCommand>,
    event_tx: &mpsc::Sender<Report>,
) {
    match effect {
        Effect::BeginScan { delay_secs } => {
            watch_info!("beginning scan, delay {delay_secs}s");
            poll.arm();
            let navigator =
                DomNavigator::new(dom.clone(), config.page.clone(), config.navigate.clone());
            let extractor = TableExtractor::new(&config.page);
            let controller = PollingController::new(
                navigator,
                extractor,
                Duration::from_secs(delay_secs),
                poll.clone(),
            );

            let done_tx = cmd_tx.clone();
            let done_poll = poll.clone();
            runtime.spawn(async move {
                let outcome = match controller.run().await {
                    Ok(groups) => ScanOutcome::Found(groups),
                    Err(WatchError::StoppedByUser) => ScanOutcome::Cancelled,
                    Err(err) => {
                        watch_warn!("scan failed: {err}");
                        ScanOutcome::Failed {
                            kind: err.kind().to_string(),
                            message: err.to_string(),
                        }
                    }
                };
                // The scan is over either way; no scan may show as running.
                done_poll.stop();
                let _ = done_tx.send(WatchCommand::Apply(Msg::ScanFinished { outcome }));
            });
        }
        Effect::HaltScan => {
            watch_info!("stop requested, will be observed at the next checkpoint");
            poll.stop();
        }
        Effect::Report(report) => {
            let _ = event_tx.send(report);
        }
    }
}
