//! Color Constants for the Library Client Theme
//!
//! This module defines all the color constants used throughout the UI.
//! The scheme is a dark slate palette with blue accents.

use eframe::egui::Color32;

/// Page background - Near-black slate
pub const PAGE_BG: Color32 = Color32::from_rgb(0x11, 0x18, 0x27);

/// Card background - Dark slate
pub const CARD_BG: Color32 = Color32::from_rgb(0x1F, 0x29, 0x37);

/// Card border - Mid slate
pub const CARD_BORDER: Color32 = Color32::from_rgb(0x37, 0x41, 0x51);

/// Input field background
pub const INPUT_BG: Color32 = Color32::from_rgb(0x37, 0x41, 0x51);

/// Input field border
pub const INPUT_BORDER: Color32 = Color32::from_rgb(0x4B, 0x55, 0x63);

/// Top bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x1F, 0x29, 0x37);

/// Primary text - Off-white
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0xF9, 0xFA, 0xFB);

/// Secondary text (hints, subtitles) - Muted gray
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x9C, 0xA3, 0xAF);

/// Field label text - Light gray
pub const TEXT_LABEL: Color32 = Color32::from_rgb(0xD1, 0xD5, 0xDB);

/// Accent for highlights and focus - Blue
pub const ACCENT: Color32 = Color32::from_rgb(0x3B, 0x82, 0xF6);

/// Primary button background
pub const BUTTON_PRIMARY: Color32 = Color32::from_rgb(0x25, 0x63, 0xEB);

/// Primary button hover
pub const BUTTON_PRIMARY_HOVER: Color32 = Color32::from_rgb(0x1D, 0x4E, 0xD8);

/// Link-style button text - Light blue
pub const LINK: Color32 = Color32::from_rgb(0x60, 0xA5, 0xFA);

/// Error color - Soft red
pub const ERROR: Color32 = Color32::from_rgb(0xF8, 0x71, 0x71);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x22, 0xC5, 0x5E);

/// Toast background
pub const TOAST_BG: Color32 = Color32::from_rgb(0x1F, 0x29, 0x37);

/// Separator/divider color
pub const SEPARATOR: Color32 = Color32::from_rgb(0x37, 0x41, 0x51);
