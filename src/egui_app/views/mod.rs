use eframe::egui;

use crate::egui_app::notify::ToastKind;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::AppView;

pub mod auth_view;
pub mod forgot_view;
pub mod member_view;
pub mod staff_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_PRIMARY,
                    egui::RichText::new("📚 Bibliodesk").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);

                    if state.session.is_authenticated() {
                        if ui.button("Logout").clicked() {
                            state.logout();
                        }
                        if let Some(user) = state.session.user() {
                            ui.colored_label(
                                colors::TEXT_SECONDARY,
                                format!("{} · {}", user.name, user.role.label()),
                            );
                        }
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(styles::page_frame())
        .show(ctx, |ui| match state.current_view {
            AppView::Auth => auth_view::render(ui, state),
            AppView::ForgotPassword => forgot_view::render(ui, state),
            AppView::MemberHome => member_view::render(ui, state),
            AppView::StaffDashboard => staff_view::render(ui, state),
        });
}

/// Draw active toasts over whatever view is showing.
pub fn render_toasts(ctx: &egui::Context, state: &AppState) {
    if state.toasts.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("toast_overlay"))
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 12.0])
        .show(ctx, |ui| {
            for toast in state.toasts.iter() {
                styles::toast_frame(toast.kind).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let (mark, mark_color) = match toast.kind {
                            ToastKind::Success => ("✓", colors::SUCCESS),
                            ToastKind::Error => ("✗", colors::ERROR),
                        };
                        ui.colored_label(mark_color, mark);
                        ui.colored_label(colors::TEXT_PRIMARY, &toast.message);
                    });
                });
                ui.add_space(6.0);
            }
        });
}
