use std::fmt;
use std::str::FromStr;

/// Key under which the visitor's theme choice is persisted in `localStorage`.
pub const STORAGE_KEY: &str = "theme";

/// The two color schemes the site renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Resolve the theme to apply on startup. A stored choice always wins;
    /// without one the system color-scheme decides; if that can't be read
    /// either, stay dark.
    pub fn initial(stored: Option<Theme>, system_dark: Option<bool>) -> Theme {
        match (stored, system_dark) {
            (Some(theme), _) => theme,
            (None, Some(false)) => Theme::Light,
            (None, _) => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(()),
        }
    }
}

/// Read the stored theme from `localStorage`. Any failure, including an
/// unknown value, reads as "nothing stored".
pub fn stored_theme() -> Option<Theme> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        .and_then(|s| s.parse().ok())
}

/// One-shot probe of the system color-scheme preference.
pub fn system_prefers_dark() -> Option<bool> {
    let query = web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()?;
    Some(query.matches())
}

/// Persist the theme choice to `localStorage`. Write errors are ignored.
pub fn persist_theme(theme: Theme) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}

/// Apply the theme by setting the `data-theme` attribute on `<html>`,
/// the one document-level marker the stylesheet keys off.
pub fn apply_theme(theme: Theme) {
    if let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = html.set_attribute("data-theme", theme.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_alternates_strictly() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_double_toggle_restores_original() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn test_stored_choice_wins_over_system() {
        assert_eq!(Theme::initial(Some(Theme::Light), Some(true)), Theme::Light);
        assert_eq!(Theme::initial(Some(Theme::Dark), Some(false)), Theme::Dark);
        assert_eq!(Theme::initial(Some(Theme::Light), None), Theme::Light);
    }

    #[test]
    fn test_system_preference_decides_without_stored_choice() {
        assert_eq!(Theme::initial(None, Some(true)), Theme::Dark);
        assert_eq!(Theme::initial(None, Some(false)), Theme::Light);
    }

    #[test]
    fn test_defaults_dark_when_nothing_is_known() {
        assert_eq!(Theme::initial(None, None), Theme::Dark);
    }

    #[test]
    fn test_parse_round_trips_both_values() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(theme.as_str().parse(), Ok(theme));
        }
        assert!("solarized".parse::<Theme>().is_err());
        assert!("".parse::<Theme>().is_err());
    }

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert!(Theme::default().is_dark());
    }
}
