//! Theme Styling Functions
//!
//! This module provides helper functions for applying the dark slate
//! color scheme consistently across all UI components.

use super::colors;
use crate::egui_app::notify::ToastKind;
use eframe::egui::{self, Color32, CornerRadius, Stroke};

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    // Window styling
    style.visuals.window_fill = colors::CARD_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::CARD_BORDER);

    // Panel styling
    style.visuals.panel_fill = colors::PAGE_BG;

    // Text edits draw on the extreme background color
    style.visuals.extreme_bg_color = colors::INPUT_BG;

    // Widget styling
    style.visuals.widgets.noninteractive.bg_fill = colors::CARD_BG;
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.inactive.bg_fill = colors::INPUT_BG;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_LABEL);
    style.visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors::INPUT_BORDER);

    style.visuals.widgets.hovered.bg_fill = colors::BUTTON_PRIMARY_HOVER;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.active.bg_fill = colors::BUTTON_PRIMARY;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    // Selection color
    style.visuals.selection.bg_fill = colors::ACCENT;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    ctx.set_style(style);
}

/// Create a frame style for full-page backgrounds
pub fn page_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::PAGE_BG)
        .inner_margin(egui::Margin::same(0))
}

/// Create a frame style for the centered card on the auth screen
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(16))
        .inner_margin(egui::Margin::same(24))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 16,
            spread: 0,
            color: Color32::from_black_alpha(80),
        })
}

/// Create a frame style for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame for a toast notification
pub fn toast_frame(kind: ToastKind) -> egui::Frame {
    let border = match kind {
        ToastKind::Success => colors::SUCCESS,
        ToastKind::Error => colors::ERROR,
    };

    egui::Frame::new()
        .fill(colors::TOAST_BG)
        .stroke(Stroke::new(1.0, border))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(12, 8))
        .shadow(egui::epaint::Shadow {
            offset: [0, 2],
            blur: 8,
            spread: 0,
            color: Color32::from_black_alpha(60),
        })
}
