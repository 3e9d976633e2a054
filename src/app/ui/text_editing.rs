// src/app/ui/text_editing.rs
use eframe::egui;

use crate::app::actions::Action;
use crate::app::sections::{visible_sections, PrefSection};
use crate::app::state::AppState;
use crate::format;
use crate::prefs::{TextEncoding, FONT_SIZE_RANGE, LINE_HEIGHT_RANGE, LINE_HEIGHT_STEP, TAB_WIDTH_RANGE};

use super::highlight_label::highlighted_heading;

const NUMERIC_FIELD_WIDTH: f32 = 40.0;

/// The "Text Editing" preferences pane. Returns actions to dispatch this frame.
pub fn text_editing(ui: &mut egui::Ui, state: &mut AppState) -> Vec<Action> {
    let mut actions = vec![];

    let query = state.search.query.clone();
    let sections = visible_sections(&query);

    if sections.is_empty() {
        ui.add_space(12.0);
        ui.weak(format!("No settings match \"{}\"", query.trim()));
        return actions;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("text_editing_grid")
            .num_columns(2)
            .spacing([16.0, 10.0])
            .show(ui, |ui| {
                for section in sections {
                    highlighted_heading(ui, section.title(), &query);
                    ui.vertical(|ui| section_body(ui, state, section, &mut actions));
                    ui.end_row();
                }
            });
    });

    actions
}

fn section_body(ui: &mut egui::Ui, state: &mut AppState, section: PrefSection, actions: &mut Vec<Action>) {
    match section {
        PrefSection::DefaultTabWidth => tab_width(ui, state, actions),
        PrefSection::Font => font_selector(ui, state, actions),
        PrefSection::FontSize => font_size(ui, state, actions),
        PrefSection::LineHeight => line_height(ui, state, actions),
        PrefSection::CodeCompletion => {
            toggle(
                ui,
                state.prefs.autocomplete_braces,
                "Autocomplete braces",
                "Automatically insert closing braces (\"}\")",
                Action::SetAutocompleteBraces,
                actions,
            );
            toggle(
                ui,
                state.prefs.enable_type_over_completion,
                "Enable type-over completion",
                "Typing a closing character steps over an auto-inserted one",
                Action::SetTypeOverCompletion,
                actions,
            );
        }
        PrefSection::LineWrapping => toggle(
            ui,
            state.prefs.wrap_lines_to_editor_width,
            "Wrap lines to editor width",
            "Soft-wrap long lines instead of scrolling horizontally",
            Action::SetWrapLines,
            actions,
        ),
        PrefSection::DefaultTextEncoding => text_encoding(ui, state, actions),
    }
}

// ---------------------------
// Numeric fields (text + stepper)
// ---------------------------

/// Text field that commits on focus loss. Rejected input snaps back to the
/// stored value.
fn numeric_field<T>(
    ui: &mut egui::Ui,
    draft: &mut String,
    stored: &str,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Option<T> {
    let resp = ui.add(
        egui::TextEdit::singleline(draft)
            .font(egui::TextStyle::Monospace)
            .desired_width(NUMERIC_FIELD_WIDTH),
    );

    if !resp.lost_focus() {
        return None;
    }

    match parse(draft.as_str()) {
        Some(v) => Some(v),
        None => {
            tracing::debug!(input = %draft, "rejected numeric input");
            *draft = stored.to_string();
            None
        }
    }
}

fn tab_width(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<Action>) {
    ui.horizontal(|ui| {
        let stored = state.prefs.default_tab_width.to_string();
        if let Some(v) = numeric_field(ui, &mut state.drafts.tab_width, &stored, |t| {
            format::parse_bounded_int(t, &TAB_WIDTH_RANGE)
        }) {
            actions.push(Action::SetTabWidth(v));
        }

        let mut v = state.prefs.default_tab_width;
        if ui
            .add(egui::DragValue::new(&mut v).clamp_range(TAB_WIDTH_RANGE).speed(0.1))
            .changed()
        {
            actions.push(Action::SetTabWidth(v));
        }
        ui.label("spaces");
    });
}

fn font_selector(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<Action>) {
    ui.horizontal(|ui| {
        ui.label("Font:");
        let custom = state.prefs.font.custom;
        if ui.radio(!custom, "System Font").clicked() && custom {
            actions.push(Action::SetCustomFont(false));
        }
        if ui.radio(custom, "Custom").clicked() && !custom {
            actions.push(Action::SetCustomFont(true));
        }
    });

    if state.prefs.font.custom {
        ui.horizontal(|ui| {
            let resp = ui.add(
                egui::TextEdit::singleline(&mut state.drafts.font_name).desired_width(180.0),
            );
            if resp.lost_focus() && state.drafts.font_name != state.prefs.font.name {
                actions.push(Action::SetFontName(state.drafts.font_name.clone()));
            }
            ui.weak(format!("{} {}", state.prefs.font.name, state.prefs.font.size));
        });
    }
}

fn font_size(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<Action>) {
    ui.horizontal(|ui| {
        let stored = state.prefs.font.size.to_string();
        if let Some(v) = numeric_field(ui, &mut state.drafts.font_size, &stored, |t| {
            format::parse_bounded_int(t, &FONT_SIZE_RANGE)
        }) {
            actions.push(Action::SetFontSize(v));
        }

        let mut v = state.prefs.font.size;
        if ui
            .add(egui::DragValue::new(&mut v).clamp_range(FONT_SIZE_RANGE).speed(0.2))
            .changed()
        {
            actions.push(Action::SetFontSize(v));
        }
        ui.label("pt");
    });
}

fn line_height(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<Action>) {
    ui.horizontal(|ui| {
        let stored = format::format_fixed2(state.prefs.line_height_multiple);
        if let Some(v) = numeric_field(ui, &mut state.drafts.line_height, &stored, |t| {
            format::parse_bounded_float(t, &LINE_HEIGHT_RANGE)
        }) {
            actions.push(Action::SetLineHeight(v));
        }

        let mut v = state.prefs.line_height_multiple;
        let resp = ui.add(
            egui::DragValue::new(&mut v)
                .clamp_range(LINE_HEIGHT_RANGE)
                .speed(LINE_HEIGHT_STEP)
                .fixed_decimals(2),
        );
        if resp.changed() {
            actions.push(Action::SetLineHeight(v));
        }
    });
}

fn toggle(
    ui: &mut egui::Ui,
    current: bool,
    label: &str,
    hint: &str,
    make: fn(bool) -> Action,
    actions: &mut Vec<Action>,
) {
    ui.horizontal(|ui| {
        let mut on = current;
        if ui.checkbox(&mut on, label).changed() {
            actions.push(make(on));
        }
        ui.weak(hint);
    });
}

fn text_encoding(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<Action>) {
    let current = state.prefs.text_encoding;

    egui::ComboBox::from_id_source("text_encoding_combo")
        .selected_text(current.label())
        .width(240.0)
        .show_ui(ui, |ui| {
            for (i, group) in TextEncoding::menu_groups().iter().enumerate() {
                if i > 0 {
                    ui.separator();
                }
                for enc in group.iter().copied() {
                    if ui.selectable_label(enc == current, enc.label()).clicked() && enc != current {
                        actions.push(Action::SetTextEncoding(enc));
                    }
                }
            }
        });
}
