//! Theme Module
//!
//! This module provides the color scheme and styling for the library
//! client. It includes:
//!
//! - Color constants for the dark slate theme
//! - Styling helper functions for consistent UI appearance
//! - Frame builders for various UI components

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
