use crate::error::PdfError;

/// Width the content is laid out at, in CSS pixels
pub const LOGICAL_WIDTH_PX: f32 = 600.0;
/// A4
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// Content scaled so the logical width fills the page width
pub fn px_to_mm(px: f32) -> f32 {
    px * PAGE_WIDTH_MM / LOGICAL_WIDTH_PX
}

/// Pages needed for content of this height. `None` when the height is not
/// a finite number.
///
/// The first page shows the content from its top. While content remains
/// below the pages already placed another page is added, so content exactly
/// one page tall still gets a second, empty page.
pub fn page_count(content_height_mm: f32) -> Option<usize> {
    if !content_height_mm.is_finite() {
        return None;
    }
    if content_height_mm < PAGE_HEIGHT_MM {
        return Some(1);
    }
    let extra = ((content_height_mm - PAGE_HEIGHT_MM) / PAGE_HEIGHT_MM).floor();
    Some((extra as usize).saturating_add(2))
}

/// Where the top of the content sits on each page, in mm (0 or negative).
/// Each page shows the content shifted up by one more page height.
pub fn page_offsets(content_height_mm: f32, max_pages: usize) -> Result<Vec<f32>, PdfError> {
    let pages = page_count(content_height_mm).unwrap_or(usize::MAX);
    if pages > max_pages {
        return Err(PdfError::PageLimit {
            pages,
            limit: max_pages,
        });
    }
    Ok((0..pages).map(|page| -(page as f32) * PAGE_HEIGHT_MM).collect())
}
