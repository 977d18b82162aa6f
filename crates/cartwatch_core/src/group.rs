use crate::{ItemGroup, ItemRecord};

/// Stateful fold that rebuilds row-groups from a flat row sequence.
///
/// The page gives no explicit group identifier; the only signal is the
/// marker column. A marker row starts a new group, except for the very
/// first marker which must not flush an empty buffer.
#[derive(Debug, Default)]
pub struct GroupAccumulator {
    buf: Vec<ItemRecord>,
    groups: Vec<ItemGroup>,
}

impl GroupAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one row. `starts_group` is true when the row carries the
    /// group marker; a marker flushes the buffered rows first, unless the
    /// buffer is still empty.
    pub fn push(&mut self, record: ItemRecord, starts_group: bool) {
        if starts_group && !self.buf.is_empty() {
            self.flush();
        }
        self.buf.push(record);
    }

    /// Flushes any residual buffer and returns the completed groups in
    /// row order.
    pub fn finish(mut self) -> Vec<ItemGroup> {
        if !self.buf.is_empty() {
            self.flush();
        }
        self.groups
    }

    fn flush(&mut self) {
        let mut rows = std::mem::take(&mut self.buf).into_iter();
        // flush is only called with a non-empty buffer
        if let Some(primary) = rows.next() {
            self.groups.push(ItemGroup {
                primary,
                secondaries: rows.collect(),
            });
        }
    }
}
