//! Light/dark theme preference logic.
//!
//! # Responsibility
//! - Resolve the active theme from the saved preference and the system
//!   color scheme.
//! - Decide when a system-scheme change may override the page theme.
//!
//! # Invariants
//! - An explicitly saved preference always wins over the system scheme.
//! - Toggling always produces the opposite theme and is meant to be saved.

/// localStorage key holding the saved preference.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Stored wire value, `"light"` or `"dark"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Body class applied for this theme.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Light => "light-theme",
            Self::Dark => "dark-theme",
        }
    }

    /// Parses a stored preference; unknown values count as no preference.
    pub fn from_saved(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Theme to apply at startup: saved preference first, system scheme second.
pub fn preferred(saved: Option<&str>, system_prefers_dark: bool) -> Theme {
    if let Some(theme) = saved.and_then(Theme::from_saved) {
        return theme;
    }
    if system_prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Theme to apply when the system scheme changes at runtime.
///
/// Returns `None` while an explicit preference is saved; the page keeps it.
pub fn on_system_change(saved: Option<&str>, system_prefers_dark: bool) -> Option<Theme> {
    if saved.and_then(Theme::from_saved).is_some() {
        return None;
    }
    Some(if system_prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    })
}

#[cfg(test)]
mod tests {
    use super::{on_system_change, preferred, Theme};

    #[test]
    fn saved_preference_wins_over_system_scheme() {
        assert_eq!(preferred(Some("light"), true), Theme::Light);
        assert_eq!(preferred(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn system_scheme_used_without_saved_preference() {
        assert_eq!(preferred(None, true), Theme::Dark);
        assert_eq!(preferred(None, false), Theme::Light);
        assert_eq!(preferred(Some("solarized"), false), Theme::Light);
    }

    #[test]
    fn system_change_ignored_while_preference_saved() {
        assert_eq!(on_system_change(Some("light"), true), None);
        assert_eq!(on_system_change(None, true), Some(Theme::Dark));
    }

    #[test]
    fn toggle_flips_and_round_trips_wire_value() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::from_saved(Theme::Dark.as_str()), Some(Theme::Dark));
    }
}
