//! Element handle capabilities
//!
//! Each trait stands for one control or collection on the page. Methods take
//! `&self`: the browser elements behind them are already interior-mutable and
//! the in-memory fakes use `Cell`/`RefCell`. Everything runs on the single UI
//! thread, so none of these are `Send`.

use crate::category::CategoryTag;

/// The document-wide theme attribute (`data-theme` on `<html>`).
pub trait ThemeRoot {
    fn theme_attribute(&self) -> Option<String>;
    fn set_theme_attribute(&self, value: &str);
}

/// Best-effort string storage. Failures read as absence and writes may be dropped.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Environment dark-mode preference. `None` when the environment cannot tell.
pub trait ColorSchemeSignal {
    fn prefers_dark(&self) -> Option<bool>;
}

pub trait FilterControl {
    fn category(&self) -> CategoryTag;
    fn set_active(&self, active: bool);
    fn is_active(&self) -> bool;
}

/// A headline card or list item. Never created or removed, only shown or hidden.
pub trait DisplayItem {
    fn category(&self) -> CategoryTag;
    /// Whether the item carries the secondary class marker (e.g. `category-sports`).
    fn has_marker(&self, marker: &str) -> bool;
    /// Make visible and fully opaque.
    fn show(&self);
    /// Hide and make fully transparent.
    fn hide(&self);
}

pub trait Viewport {
    /// Start a smooth scroll to the top. Not awaited.
    fn scroll_to_top(&self);
}

pub trait VisibilityToggle {
    fn set_visible(&self, visible: bool);
}
