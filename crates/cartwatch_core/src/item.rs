use std::fmt;

/// Enrollment status of a single cart item, as rendered by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    Open,
    Closed,
}

impl ItemStatus {
    /// Parses the page's status label. Accepts exactly "Open" or "Closed";
    /// anything else (including case variants) is rejected.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Open" => Some(ItemStatus::Open),
            "Closed" => Some(ItemStatus::Closed),
            _ => None,
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemStatus::Open => write!(f, "Open"),
            ItemStatus::Closed => write!(f, "Closed"),
        }
    }
}

/// One parsed cart row: trimmed, non-empty name plus its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    pub name: String,
    pub status: ItemStatus,
}

/// One enrollment row-group: the marker row's record plus any follow-on
/// rows (discussion/lab sections) that belong to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemGroup {
    pub primary: ItemRecord,
    pub secondaries: Vec<ItemRecord>,
}

impl ItemGroup {
    /// A group counts as available when its primary section is open.
    pub fn is_open(&self) -> bool {
        self.primary.status == ItemStatus::Open
    }
}

/// The outcome of one full table read, in row order.
pub type ScanResult = Vec<ItemGroup>;

/// Filters a scan down to the groups whose primary section is open.
pub fn open_groups(scan: &[ItemGroup]) -> Vec<ItemGroup> {
    scan.iter().filter(|group| group.is_open()).cloned().collect()
}
