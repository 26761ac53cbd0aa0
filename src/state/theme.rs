//! Theme Controller
//!
//! Two-valued dark/light theme persisted in localStorage and applied as a
//! `data-theme` attribute on `<body>`.

/// localStorage key holding the persisted theme.
const THEME_KEY: &str = "whispers_theme";

/// The wall's visual theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The persisted / `data-theme` string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parse a persisted value; anything unrecognized falls back to dark.
    pub fn parse(value: &str) -> Theme {
        match value {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// Indicator glyph for the toggle button.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀️",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Read the persisted theme, defaulting to dark when storage is
    /// unavailable or holds nothing useful.
    pub fn load() -> Theme {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(value)) = storage.get_item(THEME_KEY) {
                    return Theme::parse(&value);
                }
            }
        }
        Theme::default()
    }

    /// Persist this theme; a missing storage is silently tolerated.
    pub fn store(self) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(THEME_KEY, self.as_str());
            }
        }
    }

    /// Set the `data-theme` attribute on `<body>` so the stylesheet can
    /// restyle the page.
    pub fn apply(self) {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let _ = body.set_attribute("data-theme", self.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trip() {
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Theme::Dark);
        assert_eq!(Theme::parse(Theme::Light.as_str()), Theme::Light);
    }

    #[test]
    fn test_theme_defaults_to_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::parse(""), Theme::Dark);
        assert_eq!(Theme::parse("solarized"), Theme::Dark);
    }

    #[test]
    fn test_theme_toggle_flips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_theme_icons() {
        assert_eq!(Theme::Dark.icon(), "🌙");
        assert_eq!(Theme::Light.icon(), "☀️");
    }
}
