use eframe::egui;

use super::{theme, ui};
use super::AppState;

impl eframe::App for AppState {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        theme::apply_from_state(ctx, self);

        // Esc clears the section search
        let clear_search = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if clear_search && !self.search.query.is_empty() {
            self.apply_action(super::Action::ClearSearch);
        }

        // Native window title
        let dirty_marker = if self.prefs_dirty { " *" } else { "" };
        let title = format!("Preferences - Text Editing{}", dirty_marker);
        if self.last_window_title.as_deref() != Some(title.as_str()) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.last_window_title = Some(title);
        }

        // Top bar
        egui::TopBottomPanel::top("top").show(ctx, |ui_top| {
            let actions = ui::top_bar::top_bar(ctx, ui_top, self);
            for a in actions {
                self.apply_action(a);
            }
        });

        // Live preview of the current settings
        egui::TopBottomPanel::bottom("preview")
            .resizable(true)
            .show(ctx, |ui| {
                ui.label("Preview");
                ui::preview::preview(ui, &self.prefs);
            });

        let actions = egui::CentralPanel::default()
            .show(ctx, |ui| ui::text_editing::text_editing(ui, self))
            .inner;
        for a in actions {
            self.apply_action(a);
        }

        self.finalize_frame();
    }
}
