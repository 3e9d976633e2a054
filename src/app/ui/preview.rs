// src/app/ui/preview.rs
use eframe::egui;
use egui::text::LayoutJob;

use crate::prefs::TextEditingPrefs;

const SAMPLE: &str = "fn main() {\n\tlet greeting = \"Hello, world!\";\n\tif greeting.len() > 5 {\n\t\tprintln!(\"{greeting}: a deliberately long line to show how wrapping behaves at the editor edge\");\n\t}\n}";

/// Replaces tabs with spaces up to the next multiple of `width`.
pub fn expand_tabs(line: &str, width: u32) -> String {
    let width = width.max(1) as usize;
    let mut out = String::with_capacity(line.len());
    let mut col = 0usize;

    for ch in line.chars() {
        if ch == '\t' {
            let pad = width - (col % width);
            out.extend(std::iter::repeat(' ').take(pad));
            col += pad;
        } else {
            out.push(ch);
            col += 1;
        }
    }

    out
}

/// Font for the sample; the theme keeps `Monospace` at the editor font size.
pub fn preview_font(style: &egui::Style) -> egui::FontId {
    egui::TextStyle::Monospace.resolve(style)
}

/// Read-only code sample rendered with the current preferences.
pub fn preview(ui: &mut egui::Ui, prefs: &TextEditingPrefs) {
    let font_id = preview_font(ui.style());
    let extra = (prefs.line_height_multiple - 1.0) * font_id.size;
    let color = ui.visuals().text_color();

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        for line in SAMPLE.lines() {
            let mut job = LayoutJob::single_section(
                expand_tabs(line, prefs.default_tab_width),
                egui::TextFormat {
                    font_id: font_id.clone(),
                    color,
                    ..Default::default()
                },
            );
            job.wrap.max_width = if prefs.wrap_lines_to_editor_width {
                ui.available_width()
            } else {
                f32::INFINITY
            };

            ui.label(job);
            if extra > 0.0 {
                ui.add_space(extra);
            }
        }
    });
}
