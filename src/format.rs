use crate::types::EntryDetail;

const SIZE_WIDTH: usize = 10;

#[must_use]
pub fn format_detail_line(detail: &EntryDetail) -> String {
    format!(
        "{} {:>width$} {}",
        detail.last_modified,
        detail.size,
        detail.name,
        width = SIZE_WIDTH
    )
}

#[must_use]
pub fn format_detailed_listing(details: &[EntryDetail]) -> Vec<String> {
    details.iter().map(format_detail_line).collect()
}
