use eframe::egui;

use super::AppState;

/// Applies the editor font size to the monospace text style. The preview and
/// the numeric fields resolve `TextStyle::Monospace`, so they follow it live.
pub fn apply_from_state(ctx: &egui::Context, state: &AppState) {
    apply_font_size(ctx, state.prefs.effective_font_size());
}

pub fn apply_font_size(ctx: &egui::Context, size: f32) {
    let current = ctx
        .style()
        .text_styles
        .get(&egui::TextStyle::Monospace)
        .map(|f| f.size);
    if current == Some(size) {
        return;
    }

    let mut style = (*ctx.style()).clone();
    style
        .text_styles
        .insert(egui::TextStyle::Monospace, egui::FontId::monospace(size));
    ctx.set_style(style);
}
