//! Quote document assembly.
//!
//! `build_report` lays out a fixed, single-column document: each line is
//! placed at the current cursor and the cursor moves down by a fixed pitch.
//! The result is a plain list of positioned lines; `pdf` turns it into bytes
//! and `chart`/`format` cover terminal output.

use serde::Serialize;
use tracing::debug;

use crate::domain::{Modality, QuoteResult, Standard, VariantSet, VariantTier};

pub mod chart;
pub mod fonts;
pub mod format;
pub mod pdf;

pub use fonts::FontStyle;

/// File name of the exported quote.
pub const REPORT_FILENAME: &str = "cotizacion-conocer-clinica-salud-industrial.pdf";

pub const ISSUER: &str = "Clínica Salud Industrial";
pub const CLIENT: &str = "Pertinentia Hub Certificador";
pub const VALIDITY: &str = "2025-2026";

const BULLET: &str = "•";
const BODY_PT: f64 = 9.0;
const TOTAL_PT: f64 = 11.0;

/// Page geometry in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageLayout {
    pub width_mm: f64,
    pub height_mm: f64,
    pub margin_left_mm: f64,
    /// Baseline of the first line on a continuation page.
    pub margin_top_mm: f64,
    pub margin_bottom_mm: f64,
    /// Maximum width of wrapped bullet text.
    pub text_width_mm: f64,
}

impl PageLayout {
    pub const A4: PageLayout = PageLayout {
        width_mm: 210.0,
        height_mm: 297.0,
        margin_left_mm: 10.0,
        margin_top_mm: 15.0,
        margin_bottom_mm: 10.0,
        text_width_mm: 190.0,
    };

    fn max_baseline_mm(&self) -> f64 {
        self.height_mm - self.margin_bottom_mm
    }
}

/// Items of the "included" list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Inclusion {
    Evaluation,
    PlatformAccess,
    Manual,
    OnsiteKit,
    VirtualNoKit,
    TravelCosts,
    Advisory,
    Signature,
}

impl Inclusion {
    pub fn text(self) -> &'static str {
        match self {
            Inclusion::Evaluation => "Evaluación para certificación CONOCER + emisión de DC-3.",
            Inclusion::PlatformAccess => "Acceso a plataforma, apps y formatos en Excel.",
            Inclusion::Manual => "Manual digital y/o impreso según la modalidad.",
            Inclusion::OnsiteKit => "Uso de dummie didáctico en la parte presencial.",
            Inclusion::VirtualNoKit => "Modalidad virtual sin dummie ni viáticos.",
            Inclusion::TravelCosts => "Viáticos integrados (traslado, alimentos y casetas).",
            Inclusion::Advisory => {
                "Asesoría personalizada y acompañamiento para el proceso de certificación."
            }
            Inclusion::Signature => "Firma y sello de Clínica Salud Industrial.",
        }
    }

    /// Included items for a quote, in document order.
    pub fn for_quote(includes_onsite_kit: bool) -> Vec<Inclusion> {
        let mut items = vec![
            Inclusion::Evaluation,
            Inclusion::PlatformAccess,
            Inclusion::Manual,
        ];
        if includes_onsite_kit {
            items.push(Inclusion::OnsiteKit);
            items.push(Inclusion::TravelCosts);
        } else {
            items.push(Inclusion::VirtualNoKit);
        }
        items.push(Inclusion::Advisory);
        items.push(Inclusion::Signature);
        items
    }
}

/// What a placed line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "block", content = "item")]
pub enum BlockRole {
    Title,
    Subtitle,
    Client,
    Validity,
    DetailHeading,
    Standard,
    Modality,
    Participants,
    UnitPrice,
    TotalPrice,
    ComparativeHeading,
    ComparativeBullet(VariantTier),
    IncludedHeading,
    IncludedBullet(Inclusion),
}

/// One line of text at a fixed position. `y_mm` is the baseline, measured
/// from the top of the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedLine {
    pub role: BlockRole,
    pub page: usize,
    pub x_mm: f64,
    pub y_mm: f64,
    pub font: FontStyle,
    pub size_pt: f64,
    pub text: String,
    /// True for the second and later lines of a wrapped item.
    pub continued: bool,
}

/// A laid-out quote, ready to serialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDocument {
    pub layout: PageLayout,
    pub pages: usize,
    pub lines: Vec<PlacedLine>,
}

impl ReportDocument {
    pub fn lines_with_role(&self, role: BlockRole) -> impl Iterator<Item = &PlacedLine> {
        self.lines.iter().filter(move |l| l.role == role)
    }

    pub fn lines_on_page(&self, page: usize) -> impl Iterator<Item = &PlacedLine> {
        self.lines.iter().filter(move |l| l.page == page)
    }

    /// Included items present in the document, in order.
    pub fn inclusions(&self) -> Vec<Inclusion> {
        self.lines
            .iter()
            .filter(|l| !l.continued)
            .filter_map(|l| match l.role {
                BlockRole::IncludedBullet(item) => Some(item),
                _ => None,
            })
            .collect()
    }
}

/// Downward-moving layout cursor with automatic page breaks.
struct Cursor {
    layout: PageLayout,
    page: usize,
    y: f64,
    lines: Vec<PlacedLine>,
}

impl Cursor {
    fn new(layout: PageLayout) -> Self {
        Self {
            layout,
            page: 0,
            y: layout.margin_top_mm,
            lines: Vec::new(),
        }
    }

    fn at(&mut self, y_mm: f64) -> &mut Self {
        self.y = y_mm;
        self
    }

    fn advance(&mut self, mm: f64) -> &mut Self {
        self.y += mm;
        self
    }

    fn break_if_needed(&mut self) {
        if self.y > self.layout.max_baseline_mm() {
            self.page += 1;
            self.y = self.layout.margin_top_mm;
        }
    }

    fn put(&mut self, role: BlockRole, font: FontStyle, size_pt: f64, text: String, continued: bool) {
        self.break_if_needed();
        self.lines.push(PlacedLine {
            role,
            page: self.page,
            x_mm: self.layout.margin_left_mm,
            y_mm: self.y,
            font,
            size_pt,
            text,
            continued,
        });
    }

    /// Place a single line and move down by `pitch`.
    fn line(&mut self, role: BlockRole, font: FontStyle, size_pt: f64, text: String, pitch: f64) {
        self.put(role, font, size_pt, text, false);
        self.y += pitch;
    }

    /// Place wrapped text, one pitch per produced line.
    fn wrapped(&mut self, role: BlockRole, size_pt: f64, text: &str, pitch: f64) {
        let lines = fonts::wrap_text(text, size_pt, self.layout.text_width_mm);
        for (i, line) in lines.into_iter().enumerate() {
            self.put(role, FontStyle::Regular, size_pt, line, i > 0);
            self.y += pitch;
        }
    }

    fn finish(self) -> ReportDocument {
        ReportDocument {
            layout: self.layout,
            pages: self.page + 1,
            lines: self.lines,
        }
    }
}

/// Lay out the quote on A4.
///
/// Returns `None` unless the standard and modality are set, there is at least
/// one participant and the unit price is non-zero.
pub fn build_report(
    standard: Option<&Standard>,
    modality: Option<Modality>,
    participants: u32,
    result: &QuoteResult,
    variants: &VariantSet,
) -> Option<ReportDocument> {
    build_report_with(PageLayout::A4, standard, modality, participants, result, variants)
}

/// Lay out the quote on an arbitrary page.
pub fn build_report_with(
    layout: PageLayout,
    standard: Option<&Standard>,
    modality: Option<Modality>,
    participants: u32,
    result: &QuoteResult,
    variants: &VariantSet,
) -> Option<ReportDocument> {
    let (Some(standard), Some(modality)) = (standard, modality) else {
        return None;
    };
    if participants == 0 || result.unit_price == 0 {
        return None;
    }

    use FontStyle::{Bold, Regular};
    let mut c = Cursor::new(layout);

    c.at(15.0).line(BlockRole::Title, Bold, 16.0, ISSUER.to_string(), 0.0);
    c.at(22.0).line(
        BlockRole::Subtitle,
        Bold,
        12.0,
        "Cotización de Certificación CONOCER & DC-3".to_string(),
        0.0,
    );
    c.at(30.0).line(BlockRole::Client, Regular, BODY_PT, format!("Cliente: {CLIENT}"), 0.0);
    c.at(35.0).line(BlockRole::Validity, Regular, BODY_PT, format!("Vigencia: {VALIDITY}"), 0.0);

    c.at(45.0).line(
        BlockRole::DetailHeading,
        Bold,
        BODY_PT,
        "Detalle de la cotización".to_string(),
        6.0,
    );
    c.line(BlockRole::Standard, Regular, BODY_PT, format::standard_line(standard), 6.0);
    c.line(BlockRole::Modality, Regular, BODY_PT, format::modality_line(modality), 6.0);
    c.line(
        BlockRole::Participants,
        Regular,
        BODY_PT,
        format::participants_line(participants),
        6.0,
    );
    c.line(
        BlockRole::UnitPrice,
        Regular,
        BODY_PT,
        format::unit_price_line(result.unit_price),
        8.0,
    );
    c.line(BlockRole::TotalPrice, Bold, TOTAL_PT, format::total_line(result.total_price), 10.0);

    c.line(
        BlockRole::ComparativeHeading,
        Bold,
        BODY_PT,
        "Comparativo por participante:".to_string(),
        5.0,
    );
    for (tier, price) in variants.tiers() {
        let text = format!("{BULLET} {}: {}", tier.label(), format::fmt_mxn(price));
        c.line(BlockRole::ComparativeBullet(tier), Regular, BODY_PT, text, 5.0);
    }
    c.advance(3.0);

    c.line(
        BlockRole::IncludedHeading,
        Bold,
        BODY_PT,
        "Esta cotización incluye:".to_string(),
        5.0,
    );
    for item in Inclusion::for_quote(result.includes_onsite_kit) {
        let text = format!("{BULLET} {}", item.text());
        c.wrapped(BlockRole::IncludedBullet(item), BODY_PT, &text, 5.0);
    }

    let doc = c.finish();
    debug!(
        standard = standard.code,
        modality = modality.key(),
        pages = doc.pages,
        lines = doc.lines.len(),
        "report laid out"
    );
    Some(doc)
}
