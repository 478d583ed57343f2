//! Style helpers shared by the form widgets

use ratatui::style::{Color, Modifier, Style};

use super::super::theme::Theme;
use super::super::view::Tone;

/// Border colour of a widget
pub fn border_color(focused: bool, disabled: bool, theme: Theme) -> Color {
    if focused && !disabled {
        theme.focused_border()
    } else {
        theme.unfocused_border()
    }
}

/// Label style of a button
pub fn button_style(focused: bool, disabled: bool, theme: Theme) -> Style {
    if disabled {
        Style::default().fg(theme.muted())
    } else if focused {
        Style::default()
            .fg(theme.highlight())
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(theme.text())
    }
}

/// Accent colour of a results panel
pub fn tone_color(tone: Tone, theme: Theme) -> Color {
    match tone {
        Tone::Neutral => theme.text(),
        Tone::Success => theme.success(),
        Tone::Failure => theme.failure(),
    }
}
