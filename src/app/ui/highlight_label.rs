// src/app/ui/highlight_label.rs
use eframe::egui;
use egui::text::LayoutJob;

use crate::highlight::{render_highlighted, SegmentKind};

/// Colours used for the two kinds of highlight segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightColors {
    pub matched: egui::Color32,
    pub unmatched: egui::Color32,
}

impl HighlightColors {
    /// Matches use the strong text colour, everything else the weak one.
    /// With no active query the caller should use a plain label instead.
    pub fn from_visuals(visuals: &egui::Visuals) -> Self {
        Self {
            matched: visuals.strong_text_color(),
            unmatched: visuals.weak_text_color(),
        }
    }
}

/// Builds a single-line layout job with matches of `query` emphasised.
pub fn highlighted_job(
    source: &str,
    query: &str,
    font_id: egui::FontId,
    colors: HighlightColors,
) -> LayoutJob {
    let mut job = LayoutJob::default();

    for seg in render_highlighted(source, query) {
        let color = match seg.kind {
            SegmentKind::Matched => colors.matched,
            SegmentKind::Unmatched => colors.unmatched,
        };
        job.append(
            seg.text,
            0.0,
            egui::TextFormat {
                font_id: font_id.clone(),
                color,
                ..Default::default()
            },
        );
    }

    job
}

/// Section heading that highlights the current search query.
pub fn highlighted_heading(ui: &mut egui::Ui, title: &str, query: &str) -> egui::Response {
    let query = query.trim();
    if query.is_empty() {
        return ui.strong(title);
    }

    let font_id = egui::TextStyle::Body.resolve(ui.style());
    let colors = HighlightColors::from_visuals(ui.visuals());
    ui.label(highlighted_job(title, query, font_id, colors))
}
