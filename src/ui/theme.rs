//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Label text color.
    pub label: Color,
    /// Value text color.
    pub value: Color,
    /// Border color.
    pub border: Color,
    /// Foreground for the focused control.
    pub select_fg: Color,
    /// Background for the focused control.
    pub select_bg: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Color for disabled controls.
    pub disabled: Color,
    /// Error color.
    pub error: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                label: Color::Rgb(184, 187, 38),
                value: Color::Rgb(142, 192, 124),
                border: Color::Rgb(102, 92, 84),
                select_fg: Color::Rgb(40, 40, 40),
                select_bg: Color::Rgb(251, 184, 108),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                disabled: Color::Rgb(102, 92, 84),
                error: Color::Rgb(251, 73, 52),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                label: Color::Rgb(121, 116, 14),
                value: Color::Rgb(102, 123, 3),
                border: Color::Rgb(213, 196, 161),
                select_fg: Color::Rgb(251, 245, 234),
                select_bg: Color::Rgb(175, 58, 3),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                disabled: Color::Rgb(213, 196, 161),
                error: Color::Rgb(157, 0, 6),
            },
        }
    }
}
