//! TUI View Components
//!
//! Ratatui `Widget` implementations for the interactive browser. Each view is
//! a thin wrapper around a view model reference.
//!
//! ## Design Principles:
//! - Views borrow their view model (no ownership)
//! - No logic beyond layout
//! - Color mapping from StatusLevel to Ratatui colors happens here

pub mod header;
pub mod post_detail;
pub mod post_list;
pub mod status_bar;

pub use header::HeaderView;
pub use post_detail::PostDetailView;
pub use post_list::PostListView;
pub use status_bar::StatusBarView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}
