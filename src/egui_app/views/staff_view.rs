use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

/// Administration dashboard for library staff.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let frame = egui::Frame::default().fill(colors::PAGE_BG);

    frame.show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);

            ui.colored_label(
                colors::TEXT_PRIMARY,
                egui::RichText::new("🛠 Staff Dashboard").size(40.0).strong(),
            );
            ui.add_space(10.0);

            if let Some(user) = state.session.user() {
                ui.colored_label(
                    colors::TEXT_PRIMARY,
                    egui::RichText::new(format!("Signed in as {}", user.name)).size(22.0),
                );
                ui.colored_label(
                    colors::ACCENT,
                    egui::RichText::new(user.role.label()).size(15.0),
                );
            }
            ui.add_space(40.0);

            ui.colored_label(
                colors::TEXT_SECONDARY,
                egui::RichText::new("Member and catalog administration is coming soon...")
                    .size(16.0),
            );
        });
    });
}
