use std::fmt;
use std::rc::Rc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{PageError, PageResult};
use crate::handles::{DisplayItem, FilterControl, Viewport};

pub const ALL_CATEGORIES: &str = "all";
pub const DEFAULT_MARKER_PREFIX: &str = "category-";

/// Category label from the page markup. Any string is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTag(pub String);

impl CategoryTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_all(&self) -> bool {
        self.0 == ALL_CATEGORIES
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

/// How an item is matched against the selected category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// `all`, or the item's category equals the filter.
    #[default]
    Exact,
    /// As `Exact`, or the item carries the class `<prefix><filter>`.
    ExactOrMarker,
}

impl MatchRule {
    pub fn matches(
        &self,
        filter: &CategoryTag,
        item: &dyn DisplayItem,
        marker_prefix: &str,
    ) -> bool {
        if filter.is_all() || item.category() == *filter {
            return true;
        }
        match self {
            MatchRule::Exact => false,
            MatchRule::ExactOrMarker => {
                item.has_marker(&format!("{}{}", marker_prefix, filter))
            }
        }
    }
}

/// Result of one filter activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub active: usize,
    pub category: CategoryTag,
    pub shown: usize,
    pub hidden: usize,
}

pub struct CategoryFilter {
    controls: Vec<Box<dyn FilterControl>>,
    items: Vec<Box<dyn DisplayItem>>,
    viewport: Rc<dyn Viewport>,
    rule: MatchRule,
    marker_prefix: String,
}

impl CategoryFilter {
    pub fn new(
        controls: Vec<Box<dyn FilterControl>>,
        items: Vec<Box<dyn DisplayItem>>,
        viewport: Rc<dyn Viewport>,
        rule: MatchRule,
    ) -> Self {
        Self {
            controls,
            items,
            viewport,
            rule,
            marker_prefix: DEFAULT_MARKER_PREFIX.to_string(),
        }
    }

    pub fn with_marker_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.marker_prefix = prefix.into();
        self
    }

    pub fn rule(&self) -> MatchRule {
        self.rule
    }

    pub fn control_count(&self) -> usize {
        self.controls.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.controls.iter().position(|control| control.is_active())
    }

    /// Activate the control at `index` and re-filter every item.
    ///
    /// Clears every control before marking the chosen one, so exactly one is
    /// active afterwards. Nothing is touched when `index` is out of range.
    pub fn activate(&self, index: usize) -> PageResult<FilterOutcome> {
        let chosen = self
            .controls
            .get(index)
            .ok_or(PageError::NoSuchControl(index))?;
        let category = chosen.category();

        for control in &self.controls {
            control.set_active(false);
        }
        chosen.set_active(true);

        let mut shown = 0;
        for item in &self.items {
            if self.rule.matches(&category, &**item, &self.marker_prefix) {
                item.show();
                shown += 1;
            } else {
                item.hide();
            }
        }

        self.viewport.scroll_to_top();

        let outcome = FilterOutcome {
            active: index,
            category,
            shown,
            hidden: self.items.len() - shown,
        };
        debug!(
            "Filter '{}' applied: {} shown, {} hidden",
            outcome.category, outcome.shown, outcome.hidden
        );
        Ok(outcome)
    }

    /// Activate the first control labelled `tag`.
    pub fn activate_tag(&self, tag: &CategoryTag) -> PageResult<FilterOutcome> {
        let index = self
            .controls
            .iter()
            .position(|control| control.category() == *tag)
            .ok_or_else(|| PageError::NoControlForCategory(tag.clone()))?;
        self.activate(index)
    }
}
