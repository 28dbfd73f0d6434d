use super::normalize::normalize_extracted_text;
use super::ExtractionError;

/// Extract bounded plain text from PDF bytes.
///
/// Reads the embedded text layer via the pdf-extract crate, then
/// applies the normalization policy (whitespace collapse + length cap).
/// Scanned PDFs without a text layer surface as `EmptyDocument`.
/// Pure transformation of bytes to text; no side effects.
pub fn extract_text(pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
    let raw = pdf_extract::extract_text_from_mem(pdf_bytes)
        .map_err(|e| ExtractionError::PdfParsing(e.to_string()))?;

    let text = normalize_extracted_text(&raw);
    if text.is_empty() {
        return Err(ExtractionError::EmptyDocument);
    }

    tracing::debug!(chars = text.len(), "PDF text extracted");
    Ok(text)
}

/// Generate a valid single-page PDF carrying `text`, for tests across
/// the crate that need real document bytes.
#[cfg(test)]
pub(crate) fn make_test_pdf(text: &str) -> Vec<u8> {
    use lopdf::dictionary;
    use lopdf::{Document, Object, Stream};

    let mut doc = Document::with_version("1.4");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    // Page content stream: BT /F1 12 Tf (text) Tj ET
    let content = format!("BT /F1 12 Tf 100 700 Td ({text}) Tj ET");
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));

    let resources = dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    };

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        "Contents" => content_id,
        "Resources" => resources,
    });

    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
    });

    if let Ok(Object::Dictionary(dict)) = doc.get_object_mut(page_id) {
        dict.set("Parent", pages_id);
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });

    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_text_from_digital_pdf() {
        let pdf_bytes = make_test_pdf("The motion of a body is rectilinear");
        let text = extract_text(&pdf_bytes).unwrap();
        assert!(
            text.contains("motion") || text.contains("rectilinear"),
            "unexpected extraction output: {text}"
        );
    }

    #[test]
    fn extracted_text_has_collapsed_whitespace() {
        let pdf_bytes = make_test_pdf("spaced    out    words");
        let text = extract_text(&pdf_bytes).unwrap();
        assert!(!text.contains("  "), "whitespace not collapsed: {text:?}");
        assert_eq!(text, text.trim());
    }

    #[test]
    fn invalid_pdf_returns_parsing_error() {
        let result = extract_text(b"not a pdf");
        assert!(matches!(result, Err(ExtractionError::PdfParsing(_))));
    }

    #[test]
    fn empty_bytes_are_rejected() {
        let result = extract_text(b"");
        assert!(result.is_err());
    }
}
