//! `web-sys` element handles
//!
//! Every browser query is best-effort: a failed storage or media-query call
//! reads as absence, and a failed style or class write is dropped.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use page_core::{
    CategoryTag, ColorSchemeSignal, DisplayItem, FilterControl, PageConfig, PageError,
    PageHandles, PageResult, PreferenceStore, ThemeRoot, Viewport, VisibilityToggle,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Storage, Window};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Theme attribute on `<html>`.
pub struct DocumentRoot {
    root: Element,
    attribute: String,
}

impl DocumentRoot {
    pub fn new(document: &Document, attribute: &str) -> PageResult<Self> {
        let root = document
            .document_element()
            .ok_or_else(|| PageError::missing("html"))?;
        Ok(Self {
            root,
            attribute: attribute.to_string(),
        })
    }
}

impl ThemeRoot for DocumentRoot {
    fn theme_attribute(&self) -> Option<String> {
        self.root.get_attribute(&self.attribute)
    }

    fn set_theme_attribute(&self, value: &str) {
        let _ = self.root.set_attribute(&self.attribute, value);
    }
}

/// `window.localStorage`. Private browsing can make it absent or throwing.
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn new(window: &Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            debug!("localStorage unavailable; theme preference will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage
            .as_ref()
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, value).is_err() {
                debug!("Failed to persist '{}' under '{}'", value, key);
            }
        }
    }
}

pub struct MediaQuerySignal {
    window: Window,
}

impl MediaQuerySignal {
    pub fn new(window: &Window) -> Self {
        Self {
            window: window.clone(),
        }
    }
}

impl ColorSchemeSignal for MediaQuerySignal {
    fn prefers_dark(&self) -> Option<bool> {
        self.window
            .match_media(DARK_SCHEME_QUERY)
            .ok()
            .flatten()
            .map(|query| query.matches())
    }
}

pub struct DomFilterControl {
    element: Element,
    category_attribute: String,
    active_class: String,
}

impl FilterControl for DomFilterControl {
    fn category(&self) -> CategoryTag {
        CategoryTag::new(
            self.element
                .get_attribute(&self.category_attribute)
                .unwrap_or_default(),
        )
    }

    fn set_active(&self, active: bool) {
        let classes = self.element.class_list();
        let _ = if active {
            classes.add_1(&self.active_class)
        } else {
            classes.remove_1(&self.active_class)
        };
    }

    fn is_active(&self) -> bool {
        self.element.class_list().contains(&self.active_class)
    }
}

/// Headline card or list item, shown and hidden through inline styles.
pub struct DomDisplayItem {
    element: HtmlElement,
    category_attribute: String,
    reveal_delay_ms: u32,
}

impl DisplayItem for DomDisplayItem {
    fn category(&self) -> CategoryTag {
        CategoryTag::new(
            self.element
                .get_attribute(&self.category_attribute)
                .unwrap_or_default(),
        )
    }

    fn has_marker(&self, marker: &str) -> bool {
        self.element.class_list().contains(marker)
    }

    fn show(&self) {
        let style = self.element.style();
        // Back to whatever display the stylesheet gives it (flex/grid).
        let _ = style.remove_property("display");
        if self.reveal_delay_ms == 0 {
            let _ = style.set_property("opacity", "1");
        } else {
            // Opacity lands after the display change has reflowed.
            Timeout::new(self.reveal_delay_ms, move || {
                let _ = style.set_property("opacity", "1");
            })
            .forget();
        }
    }

    fn hide(&self) {
        let style = self.element.style();
        let _ = style.set_property("display", "none");
        let _ = style.set_property("opacity", "0");
    }
}

pub struct WindowViewport {
    window: Window,
}

impl WindowViewport {
    pub fn new(window: &Window) -> Self {
        Self {
            window: window.clone(),
        }
    }

    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }
}

impl Viewport for WindowViewport {
    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

pub struct DomVisibilityToggle {
    element: Element,
    visible_class: String,
}

impl VisibilityToggle for DomVisibilityToggle {
    fn set_visible(&self, visible: bool) {
        let classes = self.element.class_list();
        let _ = if visible {
            classes.add_1(&self.visible_class)
        } else {
            classes.remove_1(&self.visible_class)
        };
    }
}

/// The page elements the behaviors are wired to, looked up once.
#[derive(Clone)]
pub struct PageElements {
    pub theme_toggle: Element,
    pub filter_controls: Vec<Element>,
    pub display_items: Vec<HtmlElement>,
    pub back_to_top: Element,
}

impl PageElements {
    /// Fails fast on a missing toggle or back-to-top control. Empty filter and
    /// item collections are fine.
    pub fn query(document: &Document, config: &PageConfig) -> PageResult<Self> {
        let selectors = &config.selectors;
        let theme_toggle = query_required(document, &selectors.theme_toggle)?;
        let back_to_top = query_required(document, &selectors.back_to_top)?;
        let filter_controls = query_all(document, &selectors.filter_controls);

        let mut display_items = Vec::new();
        for selector in &selectors.display_items {
            for element in query_all(document, selector) {
                match element.dyn_into::<HtmlElement>() {
                    // An element matched by several item selectors is one item.
                    Ok(item) if display_items.contains(&item) => {}
                    Ok(item) => display_items.push(item),
                    Err(_) => warn!("Skipping non-HTML element matched by '{}'", selector),
                }
            }
        }

        debug!(
            "Found {} filter controls and {} display items",
            filter_controls.len(),
            display_items.len()
        );

        Ok(Self {
            theme_toggle,
            filter_controls,
            display_items,
            back_to_top,
        })
    }

    pub fn handles(
        &self,
        window: &Window,
        document: &Document,
        viewport: Rc<WindowViewport>,
        config: &PageConfig,
    ) -> PageResult<PageHandles> {
        let controls = self
            .filter_controls
            .iter()
            .map(|element| {
                Box::new(DomFilterControl {
                    element: element.clone(),
                    category_attribute: config.category_attribute.clone(),
                    active_class: config.active_class.clone(),
                }) as Box<dyn FilterControl>
            })
            .collect();
        let items = self
            .display_items
            .iter()
            .map(|element| {
                Box::new(DomDisplayItem {
                    element: element.clone(),
                    category_attribute: config.category_attribute.clone(),
                    reveal_delay_ms: config.reveal_delay_ms,
                }) as Box<dyn DisplayItem>
            })
            .collect();

        Ok(PageHandles {
            root: Box::new(DocumentRoot::new(document, &config.theme_attribute)?),
            store: Box::new(LocalStorageStore::new(window)),
            controls,
            items,
            viewport,
            back_to_top: Box::new(DomVisibilityToggle {
                element: self.back_to_top.clone(),
                visible_class: config.visible_class.clone(),
            }),
        })
    }
}

fn query_required(document: &Document, selector: &str) -> PageResult<Element> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| PageError::missing(selector))
}

/// An invalid selector matches nothing.
fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        warn!("Invalid selector '{}'", selector);
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
