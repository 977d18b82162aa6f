use cartwatch_core::{ItemGroup, ItemRecord, ItemStatus, Report};
use cartwatch_engine::report_json;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn available_report_serializes_groups_in_order() {
    let report = Report::Available(vec![ItemGroup {
        primary: ItemRecord {
            name: "Lec B".to_string(),
            status: ItemStatus::Open,
        },
        secondaries: vec![ItemRecord {
            name: "Disc B1".to_string(),
            status: ItemStatus::Closed,
        }],
    }]);

    assert_eq!(
        report_json(&report),
        json!({
            "type": "available_classes",
            "availableClasses": [{
                "primary": { "name": "Lec B", "status": "Open" },
                "secondaries": [{ "name": "Disc B1", "status": "Closed" }],
            }],
        })
    );
}

#[test]
fn failure_report_carries_kind_and_message() {
    let report = Report::Failure {
        kind: "NoDocument".to_string(),
        message: "frame content document unreachable".to_string(),
    };

    assert_eq!(
        report_json(&report),
        json!({
            "type": "error",
            "errorName": "NoDocument",
            "errorMessage": "frame content document unreachable",
        })
    );
}

#[test]
fn stopped_report_is_informational() {
    assert_eq!(report_json(&Report::Stopped), json!({ "type": "stopped" }));
}
