//! Preview drawing — a fixed-geometry approximation of the optimized
//! resume. This is not a TeX layout engine: it places whatever the markup
//! scan recovered onto A4 pages with fixed fonts and column positions.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::*;

use crate::render::markup::{ResumeMarkup, SectionBlock};
use crate::render::metrics::{A4_HEIGHT_MM, A4_WIDTH_MM, HELVETICA, MARGIN_MM};
use crate::render::RenderError;

const RIGHT_EDGE_MM: f32 = A4_WIDTH_MM - MARGIN_MM;
const TOP_START_MM: f32 = A4_HEIGHT_MM - MARGIN_MM;
/// Indent for bullet text and wrapped continuation lines.
const BULLET_TEXT_MM: f32 = 20.0;
/// Left edge of the skill item column.
const SKILL_ITEMS_MM: f32 = 45.0;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

/// Tracks the current page, layer, and baseline while drawing top-down.
/// `y` is millimetres above the page bottom.
struct PageCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl PageCursor<'_> {
    /// Opens a fresh page when fewer than `needed` millimetres remain
    /// above the bottom margin.
    fn ensure_room(&mut self, needed: f32) {
        if self.y - needed < MARGIN_MM {
            let (page, layer) = self
                .doc
                .add_page(Mm(A4_WIDTH_MM), Mm(A4_HEIGHT_MM), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = TOP_START_MM;
        }
    }

    fn text(&self, s: &str, size_pt: f32, x_mm: f32, font: &IndirectFontRef) {
        self.layer.use_text(s, size_pt, Mm(x_mm), Mm(self.y), font);
    }

    fn text_centered(&self, s: &str, size_pt: f32, font: &IndirectFontRef) {
        let x = (A4_WIDTH_MM - HELVETICA.width_mm(s, size_pt)) / 2.0;
        self.text(s, size_pt, x.max(MARGIN_MM), font);
    }

    fn text_right_aligned(&self, s: &str, size_pt: f32, font: &IndirectFontRef) {
        let x = RIGHT_EDGE_MM - HELVETICA.width_mm(s, size_pt);
        self.text(s, size_pt, x.max(MARGIN_MM), font);
    }

    /// Full-width horizontal rule at the current baseline.
    fn rule(&self) {
        let line = Line {
            points: vec![
                (Point::new(Mm(MARGIN_MM), Mm(self.y)), false),
                (Point::new(Mm(RIGHT_EDGE_MM), Mm(self.y)), false),
            ],
            is_closed: false,
        };
        self.layer.set_outline_thickness(0.4);
        self.layer.add_line(line);
    }

    fn advance(&mut self, mm: f32) {
        self.y -= mm;
    }
}

/// Draws the parsed markup to `output_path`. Already-written pages are not
/// rolled back if a later drawing step fails.
pub fn draw_preview(markup: &ResumeMarkup, output_path: &Path) -> Result<(), RenderError> {
    let (doc, page, layer) = PdfDocument::new(
        "Optimized Resume",
        Mm(A4_WIDTH_MM),
        Mm(A4_HEIGHT_MM),
        "Layer 1",
    );
    let fonts = Fonts {
        regular: builtin(&doc, BuiltinFont::Helvetica)?,
        bold: builtin(&doc, BuiltinFont::HelveticaBold)?,
        italic: builtin(&doc, BuiltinFont::HelveticaOblique)?,
    };

    let mut cursor = PageCursor {
        doc: &doc,
        layer: doc.get_page(page).get_layer(layer),
        y: TOP_START_MM,
    };

    draw_header(&mut cursor, &fonts, markup);
    for section in &markup.sections {
        draw_section(&mut cursor, &fonts, section);
    }

    let file = File::create(output_path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    Ok(())
}

fn draw_header(cursor: &mut PageCursor<'_>, fonts: &Fonts, markup: &ResumeMarkup) {
    let name = markup.name.as_deref().unwrap_or("Name");
    cursor.text_centered(name, 16.0, &fonts.bold);
    cursor.advance(10.0);

    if let Some(contact) = markup.contact.as_deref().filter(|c| !c.is_empty()) {
        cursor.text_centered(contact, 10.0, &fonts.regular);
        cursor.advance(6.0);
    }
    cursor.advance(4.0);
}

fn draw_section(cursor: &mut PageCursor<'_>, fonts: &Fonts, section: &SectionBlock) {
    cursor.ensure_room(24.0);
    cursor.text(&section.title, 14.0, MARGIN_MM, &fonts.bold);
    cursor.advance(2.0);
    cursor.rule();
    cursor.advance(6.0);

    for sub in &section.subheadings {
        cursor.ensure_room(14.0);
        cursor.text(&sub.organization, 11.0, MARGIN_MM, &fonts.bold);
        cursor.text_right_aligned(&sub.location, 11.0, &fonts.regular);
        cursor.advance(5.0);
        cursor.text(&sub.title, 10.0, MARGIN_MM, &fonts.italic);
        cursor.text_right_aligned(&sub.dates, 10.0, &fonts.italic);
        cursor.advance(7.0);
    }

    for project in &section.projects {
        cursor.ensure_room(8.0);
        cursor.text(&project.label, 11.0, MARGIN_MM, &fonts.bold);
        cursor.text_right_aligned(&project.dates, 11.0, &fonts.regular);
        cursor.advance(7.0);
    }

    for bullet in &section.bullets {
        let lines = HELVETICA.wrap_to_width(bullet, 10.0, RIGHT_EDGE_MM - BULLET_TEXT_MM);
        cursor.ensure_room(5.0 * lines.len() as f32);
        // Gutter glyph must stay in the builtin faces' single-byte range;
        // U+2022 is outside it, the middle dot is not.
        cursor.text("\u{b7}", 10.0, MARGIN_MM, &fonts.regular);
        for line in &lines {
            cursor.text(line, 10.0, BULLET_TEXT_MM, &fonts.regular);
            cursor.advance(5.0);
        }
    }

    for skill in &section.skills {
        let label = format!("{}:", skill.category);
        let lines = HELVETICA.wrap_to_width(&skill.items, 10.0, RIGHT_EDGE_MM - SKILL_ITEMS_MM);
        cursor.ensure_room(5.0 * lines.len().max(1) as f32);
        cursor.text(&label, 10.0, MARGIN_MM, &fonts.bold);
        if lines.is_empty() {
            cursor.advance(5.0);
        }
        for line in &lines {
            cursor.text(line, 10.0, SKILL_ITEMS_MM, &fonts.regular);
            cursor.advance(5.0);
        }
    }

    cursor.advance(5.0);
}

fn builtin(doc: &PdfDocumentReference, font: BuiltinFont) -> Result<IndirectFontRef, RenderError> {
    doc.add_builtin_font(font)
        .map_err(|e| RenderError::Pdf(e.to_string()))
}
