//! Cartwatch core: pure data model and control state machine.
mod effect;
mod group;
mod item;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, Report};
pub use group::GroupAccumulator;
pub use item::{open_groups, ItemGroup, ItemRecord, ItemStatus, ScanResult};
pub use msg::{Msg, ScanOutcome};
pub use state::{ControlState, WatchPhase};
pub use update::update;
pub use view_model::StatusView;
