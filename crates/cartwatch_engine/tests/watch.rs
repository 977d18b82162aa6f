use std::sync::Arc;
use std::time::{Duration, Instant};

use cartwatch_core::Report;
use cartwatch_engine::{
    DocRef, DomSurface, NavigateSettings, NodeRef, PageModel, WatchConfig, WatchHandle,
};

const CONTAINER: NodeRef = NodeRef(1);
const FRAME: NodeRef = NodeRef(2);
const DOC: DocRef = DocRef(10);

const HEADER: &str = "<tr><th>Select</th><th>Class</th><th>Days/Times</th>\
<th>Room</th><th>Instructor</th><th>Units</th><th>Status</th></tr>";

fn cart_html(status: &str) -> String {
    format!(
        r#"<html><body><div id="SSR_REGFORM_VW$scroll$0">
        <table class="PSLEVEL1GRID">{HEADER}
        <tr><td><input type="checkbox"></td><td>Lec A</td><td></td>
        <td></td><td></td><td></td><td><img alt="{status}"></td></tr>
        </table></div></body></html>"#
    )
}

/// A complete scripted enrollment page whose table snapshot never changes.
struct SteadyCart {
    html: String,
}

#[async_trait::async_trait]
impl DomSurface for SteadyCart {
    async fn element_by_id(&self, id: &str) -> Option<NodeRef> {
        match id {
            "PT_MAIN" => Some(CONTAINER),
            "main_target_win0" => Some(FRAME),
            _ => None,
        }
    }

    async fn next_mutation(&self, _container: NodeRef) {}

    async fn is_frame(&self, node: NodeRef) -> bool {
        node == FRAME
    }

    async fn populated_frame_document(&self, _frame: NodeRef) -> Option<DocRef> {
        Some(DOC)
    }

    async fn frame_loaded(&self, _frame: NodeRef) {}

    async fn frame_document(&self, _frame: NodeRef) -> Option<DocRef> {
        Some(DOC)
    }

    async fn document_html(&self, _doc: DocRef) -> Option<String> {
        Some(self.html.clone())
    }

    async fn anchors_with_text(&self, _doc: DocRef, text: &str) -> Vec<NodeRef> {
        if text == "Shopping Cart" {
            vec![NodeRef(20)]
        } else {
            Vec::new()
        }
    }

    async fn elements_with_class(&self, _doc: DocRef, class: &str) -> Vec<NodeRef> {
        if class == "PSRADIOBUTTON" {
            vec![NodeRef(40)]
        } else {
            Vec::new()
        }
    }

    async fn element_in_document(&self, _doc: DocRef, id: &str) -> Option<NodeRef> {
        (id == "DERIVED_SSS_SCT_SSR_PB_GO").then_some(NodeRef(30))
    }

    async fn click(&self, _node: NodeRef) {}
}

fn handle_over(html: String) -> WatchHandle {
    let config = WatchConfig {
        page: PageModel::default(),
        navigate: NavigateSettings {
            settle_delay: Duration::ZERO,
        },
    };
    WatchHandle::new(Arc::new(SteadyCart { html }), config)
}

#[test]
fn open_section_produces_an_available_report() {
    let watch = handle_over(cart_html("Open"));
    watch.start(1);

    let report = watch
        .recv_timeout(Duration::from_secs(5))
        .expect("terminal report");
    match report {
        Report::Available(groups) => {
            assert_eq!(groups.len(), 1);
            assert_eq!(groups[0].primary.name, "Lec A");
        }
        other => panic!("expected Available, got {other:?}"),
    }
    assert!(!watch.status().running);
}

#[test]
fn stop_yields_a_single_stopped_report() {
    let watch = handle_over(cart_html("Closed"));
    // Zero is clamped to the one-second minimum.
    watch.start(0);

    // Let the scan get going, then stop it; it is observed at the next
    // checkpoint, after the one-second sleep.
    std::thread::sleep(Duration::from_millis(200));
    assert!(watch.status().running);
    watch.stop();

    let report = watch
        .recv_timeout(Duration::from_secs(5))
        .expect("terminal report");
    assert_eq!(report, Report::Stopped);
    assert!(!watch.status().running);
    assert!(watch.try_recv().is_none());
}

#[test]
fn second_start_while_scanning_is_ignored() {
    let watch = handle_over(cart_html("Closed"));
    watch.start(1);
    std::thread::sleep(Duration::from_millis(100));
    watch.start(1);

    watch.stop();
    let report = watch
        .recv_timeout(Duration::from_secs(5))
        .expect("terminal report");
    assert_eq!(report, Report::Stopped);

    // Exactly one scan ran, so exactly one terminal report exists.
    assert!(watch.recv_timeout(Duration::from_millis(300)).is_none());
}

#[test]
fn dropping_the_handle_releases_the_page_and_its_scan() {
    let dom = Arc::new(SteadyCart {
        html: cart_html("Closed"),
    });
    let weak = Arc::downgrade(&dom);
    let config = WatchConfig {
        page: PageModel::default(),
        navigate: NavigateSettings {
            settle_delay: Duration::ZERO,
        },
    };

    let watch = WatchHandle::new(dom, config);
    watch.start(1);
    std::thread::sleep(Duration::from_millis(200));
    assert!(watch.status().running);
    drop(watch);

    // The control thread and the in-flight scan task both hold page
    // references; the drop must wind both down, not park them forever.
    let deadline = Instant::now() + Duration::from_secs(5);
    while weak.strong_count() > 0 && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(20));
    }
    assert_eq!(
        weak.strong_count(),
        0,
        "background thread kept the page alive after the handle was dropped"
    );
}

#[test]
fn iteration_counter_advances_while_closed() {
    let watch = handle_over(cart_html("Closed"));
    watch.start(1);

    // Two full delay intervals should complete at least one iteration.
    std::thread::sleep(Duration::from_millis(2500));
    assert!(watch.status().iterations >= 1);

    watch.stop();
    let _ = watch.recv_timeout(Duration::from_secs(5));
}
