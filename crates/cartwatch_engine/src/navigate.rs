use std::sync::Arc;

use tokio::time::sleep;

use crate::dom::{DocRef, DomSurface, NodeRef};
use crate::frame;
use crate::page::{NavigateSettings, PageModel};
use crate::types::WatchError;

/// The two form steps the polling loop alternates between, each returning
/// the refreshed frame document as an HTML snapshot.
#[async_trait::async_trait]
pub trait CartNavigator: Send {
    /// Captures the page shell and resolves the initial frame document.
    /// `ContainerNotFound` here is unrecoverable for the whole run.
    async fn begin(&mut self) -> Result<(), WatchError>;

    /// Clicks the cart navigation link. The page must show exactly one.
    async fn open_cart(&mut self) -> Result<String, WatchError>;

    /// Re-submits the enrollment step: the last radio option ("keep
    /// current selection") followed by the continue control. This is what
    /// re-triggers the capacity check without altering enrollment intent.
    async fn resubmit_step(&mut self) -> Result<String, WatchError>;
}

/// Production navigator over a [`DomSurface`].
pub struct DomNavigator<D: DomSurface + ?Sized> {
    dom: Arc<D>,
    page: PageModel,
    settings: NavigateSettings,
    container: Option<NodeRef>,
    doc: Option<DocRef>,
}

impl<D: DomSurface + ?Sized> DomNavigator<D> {
    pub fn new(dom: Arc<D>, page: PageModel, settings: NavigateSettings) -> Self {
        Self {
            dom,
            page,
            settings,
            container: None,
            doc: None,
        }
    }

    fn container(&self) -> Result<NodeRef, WatchError> {
        self.container.ok_or(WatchError::ContainerNotFound)
    }

    fn doc(&self) -> Result<DocRef, WatchError> {
        self.doc.ok_or(WatchError::NoDocument)
    }

    /// Settle, then re-resolve the frame document and snapshot it. Every
    /// click navigates the frame, so the old handle is stale after this.
    async fn refresh(&mut self) -> Result<String, WatchError> {
        sleep(self.settings.settle_delay).await;
        let container = self.container()?;
        let doc = frame::frame_document(self.dom.as_ref(), container, &self.page).await?;
        self.doc = Some(doc);
        self.dom
            .document_html(doc)
            .await
            .ok_or(WatchError::NoDocument)
    }
}

#[async_trait::async_trait]
impl<D: DomSurface + ?Sized> CartNavigator for DomNavigator<D> {
    async fn begin(&mut self) -> Result<(), WatchError> {
        let container = self
            .dom
            .element_by_id(&self.page.container_id)
            .await
            .ok_or(WatchError::ContainerNotFound)?;
        self.container = Some(container);

        let doc = frame::frame_document(self.dom.as_ref(), container, &self.page).await?;
        self.doc = Some(doc);
        Ok(())
    }

    async fn open_cart(&mut self) -> Result<String, WatchError> {
        let doc = self.doc()?;
        let anchors = self
            .dom
            .anchors_with_text(doc, &self.page.cart_link_text)
            .await;
        if anchors.len() != 1 {
            return Err(WatchError::AmbiguousElement {
                what: format!("{} link", self.page.cart_link_text),
                count: anchors.len(),
            });
        }
        self.dom.click(anchors[0]).await;
        self.refresh().await
    }

    async fn resubmit_step(&mut self) -> Result<String, WatchError> {
        let doc = self.doc()?;
        let radios = self
            .dom
            .elements_with_class(doc, &self.page.radio_class)
            .await;
        let last_radio = *radios
            .last()
            .ok_or_else(|| WatchError::NotFound("enrollment radio buttons".to_string()))?;
        self.dom.click(last_radio).await;

        let continue_button = self
            .dom
            .element_in_document(doc, &self.page.continue_id)
            .await
            .ok_or_else(|| WatchError::NotFound("continue button".to_string()))?;
        self.dom.click(continue_button).await;

        self.refresh().await
    }
}
