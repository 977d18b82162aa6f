/// Opaque handle to a live element on the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef(pub u64);

/// Opaque handle to a loaded document (the host page or a frame's content).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocRef(pub u64);

/// Port to the live page the watch runs against.
///
/// The engine never touches a DOM directly; everything goes through this
/// seam so the production backend (whatever hosts the watch in a real
/// browser) and test fakes are interchangeable. The two wait methods are
/// single-shot: each call registers one observer/listener, resolves on the
/// first qualifying event, and tears itself down. Neither carries a
/// timeout; an unresolvable wait suspends the caller indefinitely.
#[async_trait::async_trait]
pub trait DomSurface: Send + Sync {
    /// Looks up an element by id on the host page.
    async fn element_by_id(&self, id: &str) -> Option<NodeRef>;

    /// Suspends until the next structural mutation under `container`.
    async fn next_mutation(&self, container: NodeRef);

    /// Whether the node is actually an embedded frame element.
    async fn is_frame(&self, node: NodeRef) -> bool;

    /// The frame's content document, only if its body already has child
    /// nodes. `None` for an inaccessible or still-empty document.
    async fn populated_frame_document(&self, frame: NodeRef) -> Option<DocRef>;

    /// Suspends until the frame fires its next load event.
    async fn frame_loaded(&self, frame: NodeRef);

    /// The frame's current content document, populated or not. `None`
    /// only when the document is inaccessible.
    async fn frame_document(&self, frame: NodeRef) -> Option<DocRef>;

    /// Serialized HTML snapshot of a document, for structural parsing.
    async fn document_html(&self, doc: DocRef) -> Option<String>;

    /// Anchors in `doc` whose trimmed visible text equals `text`, in
    /// document order.
    async fn anchors_with_text(&self, doc: DocRef, text: &str) -> Vec<NodeRef>;

    /// Elements in `doc` carrying `class`, in document order.
    async fn elements_with_class(&self, doc: DocRef, class: &str) -> Vec<NodeRef>;

    /// Looks up an element by id within `doc`.
    async fn element_in_document(&self, doc: DocRef, id: &str) -> Option<NodeRef>;

    /// Synthesizes a click on the node.
    async fn click(&self, node: NodeRef);
}
