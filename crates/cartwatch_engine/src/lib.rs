//! Cartwatch engine: DOM navigation, table extraction, and the polling loop.
mod dom;
mod engine;
mod extract;
mod frame;
mod navigate;
mod page;
mod poll;
mod report;
mod types;

pub use dom::{DocRef, DomSurface, NodeRef};
pub use engine::{WatchConfig, WatchHandle, WatchStatus};
pub use extract::TableExtractor;
pub use frame::{frame_document, frame_document_cancellable};
pub use navigate::{CartNavigator, DomNavigator};
pub use page::{NavigateSettings, PageModel};
pub use poll::{PollHandle, PollingController};
pub use report::{report_json, GroupMessage, ItemMessage, ReportMessage};
pub use types::WatchError;
