// Theme and layout constants for folio-nav

use eframe::egui;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Parses the config value; anything other than "light" is dark.
    pub fn from_config(mode: &str) -> Self {
        if mode.eq_ignore_ascii_case("light") {
            Self::Light
        } else {
            Self::Dark
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Self::Light => egui::Visuals::light(),
            Self::Dark => egui::Visuals::dark(),
        }
    }
}

// --- Sizing ---
pub const NAV_PANEL_WIDTH: f32 = 220.0;
pub const NAV_ICON_SIZE: f32 = 18.0;
pub const NAV_ROW_SPACING: f32 = 6.0;
pub const HERO_ICON_SIZE: f32 = 64.0;
pub const HERO_TITLE_SIZE: f32 = 32.0;

// --- Colors ---
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(120, 180, 255);

// --- Timing ---
pub const MESSAGE_TIMEOUT: Duration = Duration::from_secs(2);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_config() {
        assert_eq!(Theme::from_config("light"), Theme::Light);
        assert_eq!(Theme::from_config("Light"), Theme::Light);
        assert_eq!(Theme::from_config("dark"), Theme::Dark);
        assert_eq!(Theme::from_config("solarized"), Theme::Dark);
    }
}
