// Theme system for the TUI
//
// A handful of built-in colour themes, selected by name from config.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Monokai,
    Dracula,
    Nord,
    Solarized,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::Dark,
            ThemeKind::Light,
            ThemeKind::Monokai,
            ThemeKind::Dracula,
            ThemeKind::Nord,
            ThemeKind::Solarized,
        ]
    }

    /// Config name of the theme
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "dark",
            ThemeKind::Light => "light",
            ThemeKind::Monokai => "monokai",
            ThemeKind::Dracula => "dracula",
            ThemeKind::Nord => "nord",
            ThemeKind::Solarized => "solarized",
        }
    }

    /// Look up a theme by config name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Monokai => Theme::monokai(),
            ThemeKind::Dracula => Theme::dracula(),
            ThemeKind::Nord => Theme::nord(),
            ThemeKind::Solarized => Theme::solarized(),
        }
    }
}

/// Resolved colours for every UI element
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_type: BorderType,
    /// Focused input, focused button, toast border
    pub highlight: Color,
    pub title: Color,
    pub status_bar: Color,
    pub label: Color,
    pub error: Color,
    pub success: Color,
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Drop the theme background so the terminal's own shows through
    pub fn without_background(mut self) -> Self {
        self.background = Color::Reset;
        self
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::Reset,
            foreground: Color::White,
            border: Color::Gray,
            border_type: BorderType::Rounded,
            highlight: Color::Cyan,
            title: Color::Cyan,
            status_bar: Color::Green,
            label: Color::Gray,
            error: Color::Red,
            success: Color::Green,
            muted: Color::DarkGray,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::White,
            foreground: Color::Black,
            border: Color::DarkGray,
            border_type: BorderType::Plain,
            highlight: Color::Blue,
            title: Color::Blue,
            status_bar: Color::DarkGray,
            label: Color::DarkGray,
            error: Color::Red,
            success: Color::Green,
            muted: Color::Gray,
        }
    }

    pub fn monokai() -> Self {
        Self {
            name: "monokai",
            background: Color::Rgb(39, 40, 34),
            foreground: Color::Rgb(248, 248, 242),
            border: Color::Rgb(117, 113, 94),
            border_type: BorderType::Rounded,
            highlight: Color::Rgb(166, 226, 46),
            title: Color::Rgb(249, 38, 114),
            status_bar: Color::Rgb(230, 219, 116),
            label: Color::Rgb(102, 217, 239),
            error: Color::Rgb(249, 38, 114),
            success: Color::Rgb(166, 226, 46),
            muted: Color::Rgb(117, 113, 94),
        }
    }

    pub fn dracula() -> Self {
        Self {
            name: "dracula",
            background: Color::Rgb(40, 42, 54),
            foreground: Color::Rgb(248, 248, 242),
            border: Color::Rgb(98, 114, 164),
            border_type: BorderType::Rounded,
            highlight: Color::Rgb(189, 147, 249),
            title: Color::Rgb(255, 121, 198),
            status_bar: Color::Rgb(80, 250, 123),
            label: Color::Rgb(139, 233, 253),
            error: Color::Rgb(255, 85, 85),
            success: Color::Rgb(80, 250, 123),
            muted: Color::Rgb(98, 114, 164),
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "nord",
            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(216, 222, 233),
            border: Color::Rgb(76, 86, 106),
            border_type: BorderType::Plain,
            highlight: Color::Rgb(136, 192, 208),
            title: Color::Rgb(129, 161, 193),
            status_bar: Color::Rgb(163, 190, 140),
            label: Color::Rgb(143, 188, 187),
            error: Color::Rgb(191, 97, 106),
            success: Color::Rgb(163, 190, 140),
            muted: Color::Rgb(76, 86, 106),
        }
    }

    pub fn solarized() -> Self {
        Self {
            name: "solarized",
            background: Color::Rgb(0, 43, 54),
            foreground: Color::Rgb(131, 148, 150),
            border: Color::Rgb(88, 110, 117),
            border_type: BorderType::Plain,
            highlight: Color::Rgb(38, 139, 210),
            title: Color::Rgb(181, 137, 0),
            status_bar: Color::Rgb(133, 153, 0),
            label: Color::Rgb(42, 161, 152),
            error: Color::Rgb(220, 50, 47),
            success: Color::Rgb(133, 153, 0),
            muted: Color::Rgb(88, 110, 117),
        }
    }
}
