//! Helvetica advance widths, used to wrap text to a fixed page width.
//!
//! Widths are in 1/1000 em from the Adobe core-font AFM files. Only the
//! regular face is tabulated; bold lines are never wrapped.

use serde::Serialize;

/// Font face of a placed line. Both map to PDF base-14 fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Regular,
    Bold,
}

impl FontStyle {
    pub fn base_font(self) -> &'static str {
        match self {
            FontStyle::Regular => "Helvetica",
            FontStyle::Bold => "Helvetica-Bold",
        }
    }
}

const MM_PER_PT: f64 = 25.4 / 72.0;

/// Helvetica widths for U+0020..=U+007E.
const ASCII_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

fn char_width(ch: char) -> u16 {
    match ch {
        ' '..='~' => ASCII_WIDTHS[ch as usize - 0x20],
        'í' | 'ì' | 'î' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ï' => 278,
        'Á' | 'É' | 'À' | 'È' | 'Ä' | 'Ë' | 'Ê' | 'Â' => 667,
        'Ó' | 'Ò' | 'Ö' | 'Ô' => 778,
        'Ú' | 'Ù' | 'Ü' | 'Ñ' => 722,
        '•' => 350,
        '–' => 556,
        '—' => 1000,
        '¿' | '¡' => 611,
        _ => 556,
    }
}

/// Width of `text` in millimetres at `size_pt`.
pub fn text_width_mm(text: &str, size_pt: f64) -> f64 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c))).sum();
    f64::from(units) / 1000.0 * size_pt * MM_PER_PT
}

/// Greedy word wrap to `max_width_mm`.
///
/// Words wider than the line are split by character, so nothing is dropped.
/// Continuation lines start flush left.
pub fn wrap_text(text: &str, size_pt: f64, max_width_mm: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if text_width_mm(&candidate, size_pt) <= max_width_mm {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if text_width_mm(word, size_pt) <= max_width_mm {
            current = word.to_string();
            continue;
        }

        for ch in word.chars() {
            current.push(ch);
            if text_width_mm(&current, size_pt) > max_width_mm && current.chars().count() > 1 {
                current.pop();
                lines.push(std::mem::take(&mut current));
                current.push(ch);
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
