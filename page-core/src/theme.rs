use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::PageError;
use crate::handles::{ColorSchemeSignal, PreferenceStore, ThemeRoot};

pub const DEFAULT_THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(PageError::UnknownTheme(other.to_string())),
        }
    }
}

/// Persisted preference wins, then a true dark-mode signal. `None` leaves the
/// document attribute unset, which the stylesheet treats as light.
pub fn resolve_initial_theme(
    persisted: Option<Theme>,
    prefers_dark: Option<bool>,
) -> Option<Theme> {
    persisted.or(match prefers_dark {
        Some(true) => Some(Theme::Dark),
        _ => None,
    })
}

pub struct ThemeSwitcher {
    root: Box<dyn ThemeRoot>,
    store: Box<dyn PreferenceStore>,
    key: String,
}

impl ThemeSwitcher {
    pub fn new(
        root: Box<dyn ThemeRoot>,
        store: Box<dyn PreferenceStore>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            root,
            store,
            key: key.into(),
        }
    }

    /// Stored preference, if any. A value outside light/dark counts as absent.
    pub fn persisted(&self) -> Option<Theme> {
        let raw = self.store.get(&self.key)?;
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                warn!("Ignoring stored theme preference under '{}': {}", self.key, e);
                None
            }
        }
    }

    /// Resolve the initial theme and apply it. Returns what was applied.
    pub fn init(&self, signal: &dyn ColorSchemeSignal) -> Option<Theme> {
        let resolved = resolve_initial_theme(self.persisted(), signal.prefers_dark());
        match resolved {
            Some(theme) => {
                self.root.set_theme_attribute(theme.as_str());
                debug!("Applied initial theme: {}", theme);
            }
            None => debug!("No theme preference; leaving document default"),
        }
        resolved
    }

    /// Theme currently applied to the document. Unset or unrecognised is light.
    pub fn current(&self) -> Theme {
        self.root
            .theme_attribute()
            .and_then(|value| value.parse().ok())
            .unwrap_or(Theme::Light)
    }

    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.root.set_theme_attribute(next.as_str());
        self.store.set(&self.key, next.as_str());
        debug!("Theme toggled to {}", next);
        next
    }
}
