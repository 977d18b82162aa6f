use tokio_util::sync::CancellationToken;
use watch_logging::watch_debug;

use crate::dom::{DocRef, DomSurface, NodeRef};
use crate::page::PageModel;
use crate::types::WatchError;

/// Resolves the interactive document inside the frame embedded in
/// `container`.
///
/// If the frame element is not there yet, waits for one structural
/// mutation of the container and looks again; the wait resolves exactly
/// once and does not re-arm, so a mutation that still does not introduce
/// the frame is a hard `NotFound`. A frame whose content has not loaded is
/// awaited via its load event, then read fresh.
pub async fn frame_document<D: DomSurface + ?Sized>(
    dom: &D,
    container: NodeRef,
    page: &PageModel,
) -> Result<DocRef, WatchError> {
    let frame = match dom.element_by_id(&page.frame_id).await {
        Some(frame) => frame,
        None => {
            watch_debug!("frame {} absent, awaiting container mutation", page.frame_id);
            dom.next_mutation(container).await;
            dom.element_by_id(&page.frame_id)
                .await
                .ok_or_else(|| WatchError::NotFound(format!("frame {}", page.frame_id)))?
        }
    };

    if !dom.is_frame(frame).await {
        return Err(WatchError::NotFound(format!("frame {}", page.frame_id)));
    }

    if let Some(doc) = dom.populated_frame_document(frame).await {
        return Ok(doc);
    }

    watch_debug!("frame {} not yet populated, awaiting load", page.frame_id);
    dom.frame_loaded(frame).await;
    dom.frame_document(frame).await.ok_or(WatchError::NoDocument)
}

/// Like [`frame_document`], but abandons the wait when `cancel` fires.
///
/// The polling loop itself never interrupts an in-flight wait; this
/// variant exists for callers that need a deterministic way out of a page
/// that never produces its frame.
pub async fn frame_document_cancellable<D: DomSurface + ?Sized>(
    dom: &D,
    container: NodeRef,
    page: &PageModel,
    cancel: &CancellationToken,
) -> Result<DocRef, WatchError> {
    tokio::select! {
        _ = cancel.cancelled() => Err(WatchError::StoppedByUser),
        resolved = frame_document(dom, container, page) => resolved,
    }
}
