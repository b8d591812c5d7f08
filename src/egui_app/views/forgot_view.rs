use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::egui_app::types::AppView;

/// Password-reset request screen, reached from the login form.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::PAGE_BG);

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            if ui.button("← Back to Login").clicked() {
                state.navigate(AppView::Auth);
            }
            ui.separator();
            ui.add_space(50.0);

            ui.colored_label(
                colors::TEXT_PRIMARY,
                egui::RichText::new("Forgot Password").size(28.0).strong(),
            );
            ui.add_space(20.0);
            ui.colored_label(
                colors::TEXT_SECONDARY,
                "Reset links are sent by the library desk for now.",
            );
            ui.colored_label(
                colors::TEXT_SECONDARY,
                "Self-service password reset is coming soon...",
            );
        });
    });
}
