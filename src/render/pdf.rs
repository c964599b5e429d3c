//! PDF painting of a computed layout

use crate::render::layout::{FontKind, PageLayout, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use crate::render::RenderError;
use printpdf::{BuiltinFont, Mm, PdfDocument};

const LAYER_NAME: &str = "Text";

/// Paints `pages` into a new PDF document and returns its bytes
///
/// Uses the builtin Helvetica faces, so no font files are embedded. Text
/// outside their character set renders incorrectly.
pub fn paint(pages: &[PageLayout], document_title: &str) -> Result<Vec<u8>, RenderError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        document_title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        LAYER_NAME,
    );

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RenderError::Pdf(format!("{:?}", e)))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| RenderError::Pdf(format!("{:?}", e)))?;

    for (index, page) in pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME)
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);

        for line in &page.lines {
            if line.text.is_empty() {
                continue;
            }
            let font = match line.font {
                FontKind::Title => &bold,
                FontKind::Body => &regular,
            };
            layer.use_text(line.text.as_str(), line.size_pt, Mm(line.x_mm), Mm(line.y_mm), font);
        }
    }

    doc.save_to_bytes()
        .map_err(|e| RenderError::Pdf(format!("{:?}", e)))
}
