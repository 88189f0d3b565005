// Color palette for the TUI

use ratatui::style::Color;

/// Pink accent for selection marks and destructive hints
pub const ACCENT_PRIMARY: Color = Color::Indexed(212);
/// Green accent for success states
pub const ACCENT_SECONDARY: Color = Color::Indexed(42);
/// Blue accent for the cursor row and titles
pub const ACCENT_HIGHLIGHT: Color = Color::Indexed(39);
/// Red for error rows
pub const ACCENT_ERROR: Color = Color::Indexed(196);

pub const TEXT_PRIMARY: Color = Color::Indexed(252);
pub const TEXT_SECONDARY: Color = Color::Indexed(245);
pub const BORDER_COLOR: Color = Color::Indexed(240);
pub const BG_DARK: Color = Color::Indexed(235);
