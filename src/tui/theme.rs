use crate::model::Theme;
use ratatui::style::Color;

/// Concrete colors for one theme. Every draw function takes a palette so the
/// rendered tree stays a pure function of state.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub accent: Color,
    pub text: Color,
    pub dim: Color,
    pub border: Color,
    pub badge: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                accent: Color::Cyan,
                text: Color::White,
                dim: Color::DarkGray,
                border: Color::Gray,
                badge: Color::Magenta,
            },
            Theme::Light => Self {
                accent: Color::Blue,
                text: Color::Black,
                dim: Color::Gray,
                border: Color::DarkGray,
                badge: Color::Red,
            },
        }
    }
}
