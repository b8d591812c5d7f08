use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

/// Landing page for library members.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let frame = egui::Frame::default().fill(colors::PAGE_BG);

    frame.show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);

            ui.colored_label(
                colors::TEXT_PRIMARY,
                egui::RichText::new("📚 Bibliodesk").size(48.0).strong(),
            );
            ui.add_space(10.0);

            if let Some(user) = state.session.user() {
                ui.colored_label(
                    colors::TEXT_PRIMARY,
                    egui::RichText::new(format!("Welcome, {}!", user.name)).size(28.0),
                );
                ui.colored_label(
                    colors::TEXT_SECONDARY,
                    egui::RichText::new(user.email.clone()).size(16.0),
                );
            }
            ui.add_space(40.0);

            ui.colored_label(
                colors::TEXT_SECONDARY,
                egui::RichText::new("Your library account is ready.").size(16.0),
            );
            ui.add_space(10.0);
            ui.colored_label(
                colors::TEXT_SECONDARY,
                "Catalog browsing and loans are coming soon...",
            );
        });
    });
}
