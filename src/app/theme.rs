use ratatui::prelude::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub(crate) status_fg: Color,
    pub(crate) status_bg: Color,
    pub(crate) message_fg: Color,
    pub(crate) filler_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub(crate) fn light() -> Self {
        Self {
            status_fg: Color::Black,
            status_bg: Color::White,
            message_fg: Color::Reset,
            filler_fg: Color::DarkGray,
        }
    }

    pub(crate) fn dark() -> Self {
        Self {
            status_fg: Color::White,
            status_bg: Color::Rgb(32, 32, 32),
            message_fg: Color::Rgb(200, 200, 200),
            filler_fg: Color::Rgb(90, 90, 90),
        }
    }

    pub(crate) fn solarized() -> Self {
        Self {
            status_fg: Color::Rgb(101, 123, 131),
            status_bg: Color::Rgb(253, 246, 227),
            message_fg: Color::Rgb(88, 110, 117),
            filler_fg: Color::Rgb(147, 161, 161),
        }
    }

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "light" => Some(Self::light()),
            "dark" => Some(Self::dark()),
            "solarized" | "solarized-light" => Some(Self::solarized()),
            _ => None,
        }
    }
}
