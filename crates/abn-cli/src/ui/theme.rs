use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Colour palette of the form
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    /// Nord color palette
    Nord,
    /// Gruvbox color palette
    Gruvbox,
    /// Tokyo Night color palette
    #[default]
    TokyoNight,
    /// Monochrome color palette
    Monochrome,
}

impl Theme {
    /// Gets the next theme in sequence
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Nord => Self::Gruvbox,
            Self::Gruvbox => Self::TokyoNight,
            Self::TokyoNight => Self::Monochrome,
            Self::Monochrome => Self::Nord,
        }
    }

    /// Border of the focused widget
    pub fn focused_border(self) -> Color {
        match self {
            Self::Nord => Color::Rgb(136, 192, 208),
            Self::Gruvbox => Color::Rgb(251, 184, 108),
            Self::TokyoNight => Color::Rgb(122, 162, 247),
            Self::Monochrome => Color::Rgb(100, 200, 255),
        }
    }

    /// Border of every other widget
    pub fn unfocused_border(self) -> Color {
        match self {
            Self::Nord => Color::Rgb(216, 222, 233),
            Self::Gruvbox => Color::Rgb(168, 153, 132),
            Self::TokyoNight => Color::Rgb(86, 95, 137),
            Self::Monochrome => Color::Rgb(128, 128, 128),
        }
    }

    /// Body text
    pub fn text(self) -> Color {
        match self {
            Self::Nord => Color::Rgb(236, 239, 244),
            Self::Gruvbox => Color::Rgb(235, 219, 178),
            Self::TokyoNight => Color::Rgb(192, 202, 245),
            Self::Monochrome => Color::Rgb(255, 255, 255),
        }
    }

    /// Secondary text such as tips and disabled controls
    pub fn muted(self) -> Color {
        self.unfocused_border()
    }

    /// Panels that report good news
    pub fn success(self) -> Color {
        match self {
            Self::Nord => Color::Rgb(163, 190, 140),
            Self::Gruvbox => Color::Rgb(184, 187, 38),
            Self::TokyoNight => Color::Rgb(158, 206, 106),
            Self::Monochrome => Color::Rgb(220, 220, 220),
        }
    }

    /// Error messages and panels that report bad news
    pub fn failure(self) -> Color {
        match self {
            Self::Nord => Color::Rgb(191, 97, 106),
            Self::Gruvbox => Color::Rgb(251, 73, 52),
            Self::TokyoNight => Color::Rgb(247, 118, 142),
            Self::Monochrome => Color::Rgb(160, 160, 160),
        }
    }

    /// Highlight of the focused button
    pub fn highlight(self) -> Color {
        self.focused_border()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_cycles_through_every_theme() {
        let mut theme = Theme::default();
        let mut seen = vec![theme];
        for _ in 0..3 {
            theme = theme.next();
            assert!(!seen.contains(&theme));
            seen.push(theme);
        }
        assert_eq!(theme.next(), Theme::default());
    }
}
