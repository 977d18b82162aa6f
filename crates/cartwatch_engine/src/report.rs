use serde::Serialize;

use cartwatch_core::{ItemGroup, ItemRecord, Report};

/// One item as the notification surface sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemMessage {
    pub name: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupMessage {
    pub primary: ItemMessage,
    pub secondaries: Vec<ItemMessage>,
}

/// Terminal report in the shape the hosting surface consumes. The tag and
/// field names are the host's existing message schema, so the camelCase
/// names are load-bearing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReportMessage {
    AvailableClasses {
        #[serde(rename = "availableClasses")]
        available_classes: Vec<GroupMessage>,
    },
    Error {
        #[serde(rename = "errorName")]
        error_name: String,
        #[serde(rename = "errorMessage")]
        error_message: String,
    },
    Stopped,
}

impl ReportMessage {
    pub fn from_report(report: &Report) -> Self {
        match report {
            Report::Available(groups) => ReportMessage::AvailableClasses {
                available_classes: groups.iter().map(group_message).collect(),
            },
            Report::Failure { kind, message } => ReportMessage::Error {
                error_name: kind.clone(),
                error_message: message.clone(),
            },
            Report::Stopped => ReportMessage::Stopped,
        }
    }
}

/// Serializes a report for a message-passing host. In-memory only; nothing
/// here is persisted.
pub fn report_json(report: &Report) -> serde_json::Value {
    serde_json::to_value(ReportMessage::from_report(report))
        .unwrap_or(serde_json::Value::Null)
}

fn group_message(group: &ItemGroup) -> GroupMessage {
    GroupMessage {
        primary: item_message(&group.primary),
        secondaries: group.secondaries.iter().map(item_message).collect(),
    }
}

fn item_message(record: &ItemRecord) -> ItemMessage {
    ItemMessage {
        name: record.name.clone(),
        status: record.status.to_string(),
    }
}
