use std::rc::Rc;

use crate::category::{CategoryFilter, FilterOutcome};
use crate::config::PageConfig;
use crate::error::PageResult;
use crate::handles::{
    ColorSchemeSignal, DisplayItem, FilterControl, PreferenceStore, ThemeRoot, Viewport,
    VisibilityToggle,
};
use crate::scroll::ScrollToTop;
use crate::theme::{Theme, ThemeSwitcher};

/// Everything the controller needs from the page, already looked up.
pub struct PageHandles {
    pub root: Box<dyn ThemeRoot>,
    pub store: Box<dyn PreferenceStore>,
    pub controls: Vec<Box<dyn FilterControl>>,
    pub items: Vec<Box<dyn DisplayItem>>,
    pub viewport: Rc<dyn Viewport>,
    pub back_to_top: Box<dyn VisibilityToggle>,
}

/// Owns the three page behaviors. They share nothing but this struct.
pub struct PageController {
    theme: ThemeSwitcher,
    filter: CategoryFilter,
    scroll: ScrollToTop,
}

impl PageController {
    pub fn new(theme: ThemeSwitcher, filter: CategoryFilter, scroll: ScrollToTop) -> Self {
        Self {
            theme,
            filter,
            scroll,
        }
    }

    pub fn assemble(handles: PageHandles, config: &PageConfig) -> Self {
        let theme = ThemeSwitcher::new(handles.root, handles.store, config.storage_key.clone());
        let filter = CategoryFilter::new(
            handles.controls,
            handles.items,
            Rc::clone(&handles.viewport),
            config.match_rule,
        )
        .with_marker_prefix(config.marker_prefix.clone());
        let scroll = ScrollToTop::new(
            handles.back_to_top,
            handles.viewport,
            config.back_to_top_threshold,
        );
        Self::new(theme, filter, scroll)
    }

    /// Run once the document structure is ready, before listeners fire.
    pub fn init(&self, signal: &dyn ColorSchemeSignal) -> Option<Theme> {
        self.theme.init(signal)
    }

    pub fn on_theme_toggle(&self) -> Theme {
        self.theme.toggle()
    }

    pub fn on_filter(&self, index: usize) -> PageResult<FilterOutcome> {
        self.filter.activate(index)
    }

    pub fn on_scroll(&self, offset: f64) -> bool {
        self.scroll.on_scroll(offset)
    }

    pub fn on_back_to_top(&self) {
        self.scroll.on_click()
    }

    pub fn theme(&self) -> &ThemeSwitcher {
        &self.theme
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn scroll(&self) -> &ScrollToTop {
        &self.scroll
    }
}
