//! Page wiring configuration
//!
//! Defaults match the digest page markup. A page may override any field with
//! a JSON blob; missing fields keep their defaults and unknown ones are
//! rejected.

use serde::{Deserialize, Serialize};

use crate::category::{MatchRule, DEFAULT_MARKER_PREFIX};
use crate::error::{PageError, PageResult};
use crate::scroll::BACK_TO_TOP_THRESHOLD;
use crate::theme::DEFAULT_THEME_KEY;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Selectors {
    pub theme_toggle: String,
    pub filter_controls: String,
    /// One selector per item variant (headline cards, list items).
    pub display_items: Vec<String>,
    pub back_to_top: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_toggle: "#themeToggle".to_string(),
            filter_controls: ".filter-btn".to_string(),
            display_items: vec![".headline-card".to_string(), ".list-item".to_string()],
            back_to_top: "#backToTop".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// localStorage key holding the theme preference
    pub storage_key: String,
    pub theme_attribute: String,
    pub category_attribute: String,
    pub selectors: Selectors,
    pub active_class: String,
    pub visible_class: String,
    pub marker_prefix: String,
    pub back_to_top_threshold: f64,
    pub match_rule: MatchRule,
    /// Delay before a shown item's opacity is restored. 0 applies it at once.
    pub reveal_delay_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_THEME_KEY.to_string(),
            theme_attribute: "data-theme".to_string(),
            category_attribute: "data-category".to_string(),
            selectors: Selectors::default(),
            active_class: "active".to_string(),
            visible_class: "visible".to_string(),
            marker_prefix: DEFAULT_MARKER_PREFIX.to_string(),
            back_to_top_threshold: BACK_TO_TOP_THRESHOLD,
            match_rule: MatchRule::Exact,
            reveal_delay_ms: 10,
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> PageResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PageResult<()> {
        let required = [
            ("storage_key", &self.storage_key),
            ("theme_attribute", &self.theme_attribute),
            ("category_attribute", &self.category_attribute),
            ("selectors.theme_toggle", &self.selectors.theme_toggle),
            ("selectors.filter_controls", &self.selectors.filter_controls),
            ("selectors.back_to_top", &self.selectors.back_to_top),
            ("active_class", &self.active_class),
            ("visible_class", &self.visible_class),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(PageError::InvalidConfig(format!("{name} must not be empty")));
            }
        }

        if self
            .selectors
            .display_items
            .iter()
            .any(|selector| selector.trim().is_empty())
        {
            return Err(PageError::InvalidConfig(
                "selectors.display_items must not contain empty selectors".to_string(),
            ));
        }

        if !self.back_to_top_threshold.is_finite() || self.back_to_top_threshold < 0.0 {
            return Err(PageError::InvalidConfig(format!(
                "back_to_top_threshold must be a non-negative number, got {}",
                self.back_to_top_threshold
            )));
        }

        Ok(())
    }
}
