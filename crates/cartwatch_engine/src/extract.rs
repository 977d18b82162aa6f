use scraper::{ElementRef, Html, Selector};

use cartwatch_core::{GroupAccumulator, ItemRecord, ItemStatus, ScanResult};

use crate::page::PageModel;
use crate::types::WatchError;

/// Parses the rendered cart table out of a document snapshot.
///
/// The table has no semantic headers; everything here is positional over a
/// fixed layout. Row 0 is the header. A data row's name sits in one fixed
/// cell, its status in the alt text of an image in another, and the group
/// marker is the presence of an input control in the first cell.
#[derive(Debug, Clone)]
pub struct TableExtractor {
    table_id: String,
    grid_class: String,
    name_cell: usize,
    status_cell: usize,
}

impl TableExtractor {
    pub fn new(page: &PageModel) -> Self {
        Self {
            table_id: page.table_id.clone(),
            grid_class: page.grid_class.clone(),
            name_cell: page.name_cell,
            status_cell: page.status_cell,
        }
    }

    pub fn extract(&self, html: &str) -> Result<ScanResult, WatchError> {
        let doc = Html::parse_document(html);

        // The table id contains `$`, so it goes through a quoted attribute
        // selector rather than a `#` shorthand.
        let table_sel = selector(&format!(r#"[id="{}"]"#, self.table_id))?;
        let table = doc
            .select(&table_sel)
            .next()
            .ok_or_else(|| WatchError::StructureNotFound(format!("cart table {}", self.table_id)))?;

        let grid_sel = selector(&format!(".{}", self.grid_class))?;
        let grid = table.select(&grid_sel).next().ok_or_else(|| {
            WatchError::StructureNotFound(format!("inner grid {}", self.grid_class))
        })?;

        let row_sel = selector("tr")?;
        let cell_sel = selector("th, td")?;
        let input_sel = selector("input")?;
        let img_sel = selector("img")?;

        let mut acc = GroupAccumulator::new();
        for row in grid.select(&row_sel).skip(1) {
            let cells: Vec<ElementRef> = row.select(&cell_sel).collect();

            let name = cells
                .get(self.name_cell)
                .map(|cell| cell.text().collect::<String>())
                .unwrap_or_default();
            let name = name.trim().replace('\n', "");
            if name.is_empty() {
                return Err(WatchError::ParseError("item name".to_string()));
            }

            let alt = cells
                .get(self.status_cell)
                .and_then(|cell| cell.select(&img_sel).next())
                .and_then(|img| img.value().attr("alt"));
            let status = alt.and_then(ItemStatus::parse).ok_or_else(|| {
                WatchError::ParseError(format!("status for item {name}"))
            })?;

            let starts_group = cells
                .first()
                .map(|cell| cell.select(&input_sel).next().is_some())
                .unwrap_or(false);

            acc.push(ItemRecord { name, status }, starts_group);
        }

        Ok(acc.finish())
    }
}

fn selector(css: &str) -> Result<Selector, WatchError> {
    Selector::parse(css)
        .map_err(|_| WatchError::StructureNotFound(format!("unusable selector {css}")))
}
