use std::io::Write;
use std::path::Path;

use newsletter_compiler_text::compile_blocks;
use newsletter_model::{ContentBlock, EmailSettings};
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::error::PdfError;
use crate::layout::{layout, Placed, CONTENT_PADDING_PX};
use crate::pagination::{page_offsets, px_to_mm, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};

/// Upper bound on pages per document
pub const MAX_PAGES: usize = 500;

const PT_PER_MM: f32 = 72.0 / 25.4;
const REGULAR: Name<'static> = Name(b"F1");
const BOLD: Name<'static> = Name(b"F2");

/// Render blocks to PDF bytes
pub fn compile_to_pdf(blocks: &[ContentBlock], settings: &EmailSettings) -> Result<Vec<u8>, PdfError> {
    let column = layout(&compile_blocks(blocks));
    let offsets = page_offsets(px_to_mm(column.height), MAX_PAGES)?;

    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let regular_id = Ref::new(3);
    let bold_id = Ref::new(4);
    let info_id = Ref::new(5);
    let page_ids: Vec<Ref> = (0..offsets.len())
        .map(|i| Ref::new(6 + 2 * i as i32))
        .collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_ids.iter().copied())
        .count(page_ids.len() as i32);

    let title = if settings.subject.trim().is_empty() {
        "Newsletter"
    } else {
        settings.subject.as_str()
    };
    pdf.document_info(info_id).title(TextStr(title));

    let media_box = Rect::new(0.0, 0.0, PAGE_WIDTH_MM * PT_PER_MM, PAGE_HEIGHT_MM * PT_PER_MM);
    for (page_id, offset) in page_ids.iter().zip(&offsets) {
        let content_id = Ref::new(page_id.get() + 1);

        let mut page = pdf.page(*page_id);
        page.media_box(media_box);
        page.parent(page_tree_id);
        page.contents(content_id);
        page.resources()
            .fonts()
            .pair(REGULAR, regular_id)
            .pair(BOLD, bold_id);
        page.finish();

        let stream = page_content(&column.items, *offset);
        pdf.stream(content_id, &stream);
    }

    pdf.type1_font(regular_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    pdf.type1_font(bold_id)
        .base_font(Name(b"Helvetica-Bold"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    let bytes = pdf.finish();
    tracing::debug!(pages = offsets.len(), bytes = bytes.len(), "rendered pdf");
    Ok(bytes)
}

/// Draw every item that lands on the page showing the content at `offset` mm
fn page_content(items: &[Placed], offset: f32) -> Vec<u8> {
    let mut content = Content::new();
    let left = px_to_mm(CONTENT_PADDING_PX) * PT_PER_MM;
    let right = (PAGE_WIDTH_MM - px_to_mm(CONTENT_PADDING_PX)) * PT_PER_MM;

    for item in items {
        // Baseline sits roughly 80% down the line box
        let baseline_mm = px_to_mm(item.top + item.font_size * 0.8) + offset;
        if !(0.0..=PAGE_HEIGHT_MM).contains(&baseline_mm) {
            continue;
        }
        let y = (PAGE_HEIGHT_MM - baseline_mm) * PT_PER_MM;

        if item.rule {
            content.set_stroke_gray(0.8);
            content.set_line_width(0.5);
            content.move_to(left, y);
            content.line_to(right, y);
            content.stroke();
            continue;
        }

        let font = if item.bold { BOLD } else { REGULAR };
        let encoded = win_ansi(&item.text);
        content.begin_text();
        content.set_font(font, px_to_mm(item.font_size) * PT_PER_MM);
        content.next_line(left, y);
        content.show(Str(&encoded));
        content.end_text();
    }

    content.finish()
}

/// Encode for the standard fonts' WinAnsi table, `?` for anything outside it
fn win_ansi(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        match c {
            ' '..='~' => out.push(c as u8),
            '\u{a0}'..='\u{ff}' => out.push(c as u32 as u8),
            '\u{2014}' => out.push(0x97),
            '\u{2013}' => out.push(0x96),
            '\u{2018}' => out.push(0x91),
            '\u{2019}' => out.push(0x92),
            '\u{201c}' => out.push(0x93),
            '\u{201d}' => out.push(0x94),
            '\u{2022}' => out.push(0x95),
            '\u{2026}' => out.push(0x85),
            '\u{20ac}' => out.push(0x80),
            '\u{2192}' => out.extend_from_slice(b"->"),
            _ => out.push(b'?'),
        }
    }
    out
}

/// Render and write to `path`. The bytes go to a temporary file in the same
/// directory first, which is removed if anything fails.
pub fn write_pdf(
    blocks: &[ContentBlock],
    settings: &EmailSettings,
    path: &Path,
) -> Result<(), PdfError> {
    let bytes = compile_to_pdf(blocks, settings)?;
    let write_error = |source: std::io::Error| PdfError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(&bytes).map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;

    tracing::info!(path = %path.display(), "wrote pdf");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsletter_model::{create_block, BlockType, IDGenerator};

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|w| *w == needle).count()
    }

    fn settings(subject: &str) -> EmailSettings {
        EmailSettings {
            subject: subject.to_string(),
            ..EmailSettings::default()
        }
    }

    #[test]
    fn test_single_page_document() {
        let mut ids = IDGenerator::from_seed("p");
        let blocks = vec![
            create_block(BlockType::Heading, &mut ids),
            create_block(BlockType::Text, &mut ids),
        ];
        let bytes = compile_to_pdf(&blocks, &settings("Spring")).unwrap();

        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(count(&bytes, b"/Type /Page\n"), 1);
        assert_eq!(count(&bytes, b"/Helvetica-Bold"), 1);
        assert!(count(&bytes, b"(Spring)") >= 1);
    }

    #[test]
    fn test_tall_content_paginates() {
        let blocks: Vec<ContentBlock> = serde_json::from_value(serde_json::json!([
            { "id": "a", "type": "spacer", "height": "1200px" },
            { "id": "b", "type": "text", "content": "<p>Bottom</p>" }
        ]))
        .unwrap();

        // 1200px spacer + padding is a little over 420mm
        let bytes = compile_to_pdf(&blocks, &settings("")).unwrap();
        assert_eq!(count(&bytes, b"/Type /Page\n"), 2);
        assert!(count(&bytes, b"(Newsletter)") >= 1);
    }

    #[test]
    fn test_huge_spacer_is_refused() {
        let blocks: Vec<ContentBlock> = serde_json::from_value(serde_json::json!([
            { "id": "a", "type": "spacer", "height": "100000000000px" }
        ]))
        .unwrap();

        let result = compile_to_pdf(&blocks, &settings(""));
        assert!(matches!(
            result,
            Err(PdfError::PageLimit { limit: MAX_PAGES, .. })
        ));
    }

    #[test]
    fn test_empty_blocks_still_render_a_page() {
        let bytes = compile_to_pdf(&[], &settings("")).unwrap();
        assert_eq!(count(&bytes, b"/Type /Page\n"), 1);
    }

    #[test]
    fn test_win_ansi() {
        assert_eq!(win_ansi("a\u{2014}b"), vec![b'a', 0x97, b'b']);
        assert_eq!(win_ansi("\u{a9}"), vec![0xa9]);
        assert_eq!(win_ansi("x \u{2192} y"), b"x -> y".to_vec());
        assert_eq!(win_ansi("\u{1f600}"), b"?".to_vec());
    }

    #[test]
    fn test_write_pdf_replaces_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("newsletter.pdf");
        std::fs::write(&path, b"old").unwrap();

        write_pdf(&[], &settings("Hi"), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_pdf_into_missing_directory_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("newsletter.pdf");

        let result = write_pdf(&[], &settings(""), &path);
        assert!(matches!(result, Err(PdfError::Write { .. })));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
