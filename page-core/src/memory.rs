//! In-memory element handles
//!
//! Clones share state, so a test can keep one copy and hand another to the
//! controller, then observe what the controller did.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::category::CategoryTag;
use crate::handles::{
    ColorSchemeSignal, DisplayItem, FilterControl, PreferenceStore, ThemeRoot, Viewport,
    VisibilityToggle,
};

#[derive(Debug, Clone, Default)]
pub struct MemoryRoot {
    attribute: Rc<RefCell<Option<String>>>,
}

impl MemoryRoot {
    pub fn with_attribute(value: &str) -> Self {
        let root = Self::default();
        root.set_theme_attribute(value);
        root
    }

    pub fn attribute(&self) -> Option<String> {
        self.attribute.borrow().clone()
    }
}

impl ThemeRoot for MemoryRoot {
    fn theme_attribute(&self) -> Option<String> {
        self.attribute()
    }

    fn set_theme_attribute(&self, value: &str) {
        *self.attribute.borrow_mut() = Some(value.to_string());
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    pub fn entry(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entry(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Dark-mode signal with a fixed answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSignal(pub Option<bool>);

impl ColorSchemeSignal for FixedSignal {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct MemoryControl {
    category: CategoryTag,
    active: Rc<Cell<bool>>,
}

impl MemoryControl {
    pub fn new(category: &str) -> Self {
        Self {
            category: CategoryTag::new(category),
            active: Rc::new(Cell::new(false)),
        }
    }

    pub fn active(self) -> Self {
        self.active.set(true);
        self
    }
}

impl FilterControl for MemoryControl {
    fn category(&self) -> CategoryTag {
        self.category.clone()
    }

    fn set_active(&self, active: bool) {
        self.active.set(active);
    }

    fn is_active(&self) -> bool {
        self.active.get()
    }
}

/// Starts visible and opaque, as static markup renders it.
#[derive(Debug, Clone)]
pub struct MemoryItem {
    category: CategoryTag,
    markers: Vec<String>,
    visible: Rc<Cell<bool>>,
    opacity: Rc<Cell<f32>>,
}

impl MemoryItem {
    pub fn new(category: &str) -> Self {
        Self {
            category: CategoryTag::new(category),
            markers: Vec::new(),
            visible: Rc::new(Cell::new(true)),
            opacity: Rc::new(Cell::new(1.0)),
        }
    }

    pub fn with_marker(mut self, marker: &str) -> Self {
        self.markers.push(marker.to_string());
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn opacity(&self) -> f32 {
        self.opacity.get()
    }
}

impl DisplayItem for MemoryItem {
    fn category(&self) -> CategoryTag {
        self.category.clone()
    }

    fn has_marker(&self, marker: &str) -> bool {
        self.markers.iter().any(|m| m == marker)
    }

    fn show(&self) {
        self.visible.set(true);
        self.opacity.set(1.0);
    }

    fn hide(&self) {
        self.visible.set(false);
        self.opacity.set(0.0);
    }
}

/// Counts scroll-to-top requests.
#[derive(Debug, Clone, Default)]
pub struct MemoryViewport {
    scrolls: Rc<Cell<usize>>,
}

impl MemoryViewport {
    pub fn scroll_count(&self) -> usize {
        self.scrolls.get()
    }
}

impl Viewport for MemoryViewport {
    fn scroll_to_top(&self) {
        self.scrolls.set(self.scrolls.get() + 1);
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryToggle {
    visible: Rc<Cell<bool>>,
}

impl MemoryToggle {
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }
}

impl VisibilityToggle for MemoryToggle {
    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }
}
