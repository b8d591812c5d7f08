use eframe::egui;

use crate::egui_app::form::FormMode;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::AppView;
use crate::shared::auth::Role;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    // Fill the entire background first
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::PAGE_BG);

    // While the saved session is being restored, or once a session
    // exists and the redirect is about to happen, show only the loader.
    if state.session.is_loading() || state.session.is_authenticated() {
        render_loader(ui, available_rect);
        return;
    }

    let is_register = state.form.mode == FormMode::Register;
    let card_size = if is_register {
        egui::vec2(380.0, 596.0)
    } else {
        egui::vec2(380.0, 420.0)
    };
    let card_rect = egui::Rect::from_center_size(available_rect.center(), card_size);

    ui.scope_builder(egui::UiBuilder::new().max_rect(card_rect), |ui| {
        styles::card_frame().show(ui, |ui| {
            ui.set_width(card_size.x - 48.0);

            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("📚").size(30.0));
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(if is_register {
                        "Create an Account"
                    } else {
                        "Login to Your Account"
                    })
                    .size(24.0)
                    .strong()
                    .color(colors::TEXT_PRIMARY),
                );
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(if is_register {
                        "Join us and start your journey"
                    } else {
                        "Welcome back! Please enter your details"
                    })
                    .size(13.0)
                    .color(colors::TEXT_SECONDARY),
                );
            });
            ui.add_space(16.0);

            if is_register {
                field_label(ui, "Full Name");
                ui.add_sized(
                    [ui.available_width(), 32.0],
                    egui::TextEdit::singleline(&mut state.form.name)
                        .hint_text("John Doe")
                        .text_color(colors::TEXT_PRIMARY),
                );
                ui.add_space(10.0);

                field_label(ui, "Account Type");
                ui.horizontal(|ui| {
                    for role in Role::ALL {
                        if ui
                            .selectable_label(state.form.role == role, role.label())
                            .clicked()
                        {
                            state.form.role = role;
                        }
                    }
                });
                ui.add_space(10.0);
            }

            field_label(ui, "Email Address");
            ui.add_sized(
                [ui.available_width(), 32.0],
                egui::TextEdit::singleline(&mut state.form.email)
                    .hint_text("you@example.com")
                    .text_color(colors::TEXT_PRIMARY),
            );
            ui.add_space(10.0);

            field_label(ui, "Password");
            ui.add_sized(
                [ui.available_width(), 32.0],
                egui::TextEdit::singleline(&mut state.form.password)
                    .password(true)
                    .hint_text("••••••••")
                    .text_color(colors::TEXT_PRIMARY),
            );
            ui.add_space(10.0);

            if is_register {
                field_label(ui, "Confirm Password");
                ui.add_sized(
                    [ui.available_width(), 32.0],
                    egui::TextEdit::singleline(&mut state.form.confirm_password)
                        .password(true)
                        .hint_text("••••••••")
                        .text_color(colors::TEXT_PRIMARY),
                );
                ui.add_space(10.0);
            } else {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(egui::Button::new(
                            egui::RichText::new("Forgot Password?")
                                .size(13.0)
                                .color(colors::LINK),
                        ))
                        .clicked()
                    {
                        state.navigate(AppView::ForgotPassword);
                    }
                });
                ui.add_space(6.0);
            }

            if let Some(ref error) = state.form.error {
                ui.label(egui::RichText::new(error.to_string()).color(colors::ERROR));
                ui.add_space(6.0);
            }

            ui.add_space(8.0);

            let submitting = state.form.is_submitting();
            let submit_text = if submitting {
                "Processing..."
            } else if is_register {
                "Create Account"
            } else {
                "Sign in"
            };

            let submit = ui.add_enabled(
                !submitting,
                egui::Button::new(
                    egui::RichText::new(submit_text)
                        .size(15.0)
                        .color(colors::TEXT_PRIMARY),
                )
                .fill(colors::BUTTON_PRIMARY)
                .min_size(egui::vec2(ui.available_width(), 40.0)),
            );
            if submit.clicked() {
                state.submit_form();
            }

            if submitting {
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    ui.spinner();
                });
            }

            ui.add_space(14.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(if is_register {
                        "Already have an account?"
                    } else {
                        "Don't have an account?"
                    })
                    .size(13.0)
                    .color(colors::TEXT_SECONDARY),
                );
                let toggle = ui.add_enabled(
                    !submitting,
                    egui::Button::new(
                        egui::RichText::new(if is_register { "Login" } else { "Register" })
                            .size(13.0)
                            .color(colors::LINK),
                    ),
                );
                if toggle.clicked() {
                    state.form.toggle_mode();
                }
            });
        });
    });
}

fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(13.0)
            .color(colors::TEXT_LABEL),
    );
    ui.add_space(4.0);
}

fn render_loader(ui: &mut egui::Ui, rect: egui::Rect) {
    ui.scope_builder(egui::UiBuilder::new().max_rect(rect), |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space((rect.height() / 2.0 - 30.0).max(0.0));
            ui.spinner();
            ui.add_space(8.0);
            ui.label(egui::RichText::new("Loading...").color(colors::TEXT_SECONDARY));
        });
    });
}
