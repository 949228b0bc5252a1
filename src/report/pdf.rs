//! Minimal PDF 1.4 writer for laid-out quotes.
//!
//! Output uses the base-14 Helvetica fonts with WinAnsiEncoding and plain
//! (uncompressed) content streams, one per page. Every text byte outside
//! printable ASCII is written as an octal escape, so the file body is 7-bit.

use crate::report::{FontStyle, ReportDocument};

const PT_PER_MM: f64 = 72.0 / 25.4;

const CATALOG_ID: usize = 1;
const PAGES_ID: usize = 2;
const FONT_REGULAR_ID: usize = 3;
const FONT_BOLD_ID: usize = 4;
const INFO_ID: usize = 5;
const FIRST_PAGE_ID: usize = 6;

struct PdfBuffer {
    buf: Vec<u8>,
    offsets: Vec<usize>,
}

impl PdfBuffer {
    fn new() -> Self {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");
        Self {
            buf,
            offsets: Vec::new(),
        }
    }

    /// Append object `id`. Objects must be written in id order.
    fn object(&mut self, id: usize, body: &str) {
        debug_assert_eq!(id, self.offsets.len() + 1);
        self.offsets.push(self.buf.len());
        self.push(&format!("{id} 0 obj\n{body}\nendobj\n"));
    }

    fn stream(&mut self, id: usize, data: &str) {
        let body = format!("<< /Length {} >>\nstream\n{data}\nendstream", data.len());
        self.object(id, &body);
    }

    fn push(&mut self, s: &str) {
        self.buf.extend_from_slice(s.as_bytes());
    }

    fn finish(mut self) -> Vec<u8> {
        let xref_at = self.buf.len();
        let size = self.offsets.len() + 1;

        let mut xref = format!("xref\n0 {size}\n0000000000 65535 f \n");
        for offset in &self.offsets {
            xref.push_str(&format!("{offset:010} 00000 n \n"));
        }
        self.push(&xref);
        self.push(&format!(
            "trailer\n<< /Size {size} /Root {CATALOG_ID} 0 R /Info {INFO_ID} 0 R >>\nstartxref\n{xref_at}\n%%EOF\n"
        ));
        self.buf
    }
}

/// Serialize a laid-out document to PDF bytes.
pub fn render_pdf(doc: &ReportDocument) -> Vec<u8> {
    let width_pt = doc.layout.width_mm * PT_PER_MM;
    let height_pt = doc.layout.height_mm * PT_PER_MM;
    let page_ids: Vec<usize> = (0..doc.pages).map(|i| FIRST_PAGE_ID + 2 * i).collect();

    let mut pdf = PdfBuffer::new();

    pdf.object(CATALOG_ID, &format!("<< /Type /Catalog /Pages {PAGES_ID} 0 R >>"));
    let kids: Vec<String> = page_ids.iter().map(|id| format!("{id} 0 R")).collect();
    pdf.object(
        PAGES_ID,
        &format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            page_ids.len()
        ),
    );
    pdf.object(FONT_REGULAR_ID, &font_dict(FontStyle::Regular));
    pdf.object(FONT_BOLD_ID, &font_dict(FontStyle::Bold));
    pdf.object(
        INFO_ID,
        &format!(
            "<< /Title ({}) /Producer (cotizador-conocer) >>",
            encode_text("Cotización de Certificación CONOCER & DC-3")
        ),
    );

    for (page, &page_id) in page_ids.iter().enumerate() {
        let contents_id = page_id + 1;
        pdf.object(
            page_id,
            &format!(
                "<< /Type /Page /Parent {PAGES_ID} 0 R /MediaBox [0 0 {width_pt:.2} {height_pt:.2}] \
                 /Resources << /Font << /F1 {FONT_REGULAR_ID} 0 R /F2 {FONT_BOLD_ID} 0 R >> >> \
                 /Contents {contents_id} 0 R >>"
            ),
        );
        pdf.stream(contents_id, &page_content(doc, page, height_pt));
    }

    pdf.finish()
}

fn font_dict(style: FontStyle) -> String {
    format!(
        "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
        style.base_font()
    )
}

fn font_resource(style: FontStyle) -> &'static str {
    match style {
        FontStyle::Regular => "F1",
        FontStyle::Bold => "F2",
    }
}

fn page_content(doc: &ReportDocument, page: usize, height_pt: f64) -> String {
    let mut out = String::new();
    for line in doc.lines_on_page(page) {
        let x = line.x_mm * PT_PER_MM;
        let y = height_pt - line.y_mm * PT_PER_MM;
        out.push_str(&format!(
            "BT /{} {} Tf {x:.2} {y:.2} Td ({}) Tj ET\n",
            font_resource(line.font),
            line.size_pt,
            encode_text(&line.text)
        ));
    }
    out
}

/// Encode text for a PDF literal string under WinAnsiEncoding.
///
/// Characters with no WinAnsi code point become `?`.
pub fn encode_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            ' '..='~' => out.push(ch),
            _ => {
                let byte = win_ansi_byte(ch).unwrap_or(b'?');
                if byte.is_ascii() {
                    out.push(byte as char);
                } else {
                    out.push_str(&format!("\\{byte:03o}"));
                }
            }
        }
    }
    out
}

fn win_ansi_byte(ch: char) -> Option<u8> {
    match ch {
        '€' => Some(0x80),
        '‘' => Some(0x91),
        '’' => Some(0x92),
        '“' => Some(0x93),
        '”' => Some(0x94),
        '•' => Some(0x95),
        '–' => Some(0x96),
        '—' => Some(0x97),
        '\u{A0}'..='\u{FF}' => Some(ch as u32 as u8),
        _ => None,
    }
}
