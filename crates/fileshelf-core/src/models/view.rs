use serde::Serialize;

use crate::highlight::Segment;

/// One rendered page of the filtered set, ready for the table layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub rows: Vec<RecordRow>,
    pub current_page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub loading: bool,
}

/// One table row. Title and owner name carry highlight segmentation for the
/// active query; `created` is the display date (`dd/mm/yyyy`, or `N/A`).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRow {
    pub id: i64,
    /// 1-based position within the whole filtered set, not the page.
    pub serial: usize,
    pub title: Vec<Segment>,
    pub owner: Vec<Segment>,
    pub created: String,
    pub file_path: String,
}
