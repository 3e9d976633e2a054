// src/app/ui/top_bar.rs
use eframe::egui;

use super::super::actions::Action;
use super::super::state::AppState;

pub fn top_bar(_ctx: &egui::Context, ui: &mut egui::Ui, state: &mut AppState) -> Vec<Action> {
    let mut actions = vec![];

    ui.horizontal(|ui| {
        ui.heading("Text Editing");

        ui.separator();

        // ----- Section search -----
        let mut query = state.search.query.clone();
        let resp = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text("Search settings")
                .desired_width(220.0),
        );
        if resp.changed() {
            actions.push(Action::SetSearchQuery(query));
        }
        if !state.search.query.is_empty() && ui.button("✕").clicked() {
            actions.push(Action::ClearSearch);
        }

        // ----- Persistence -----
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Restore defaults").clicked() {
                actions.push(Action::ResetPreferences);
            }

            let save = ui.add_enabled(state.store.is_some(), egui::Button::new("Save"));
            if save.clicked() {
                actions.push(Action::SavePreferences);
            }

            if let Some(status) = state.status.as_deref() {
                ui.colored_label(egui::Color32::LIGHT_RED, status);
            } else if let Some(store) = state.store.as_ref() {
                ui.weak(store.path().display().to_string());
            }
        });
    });

    actions
}
