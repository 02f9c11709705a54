use std::rc::Rc;

use crate::handles::{Viewport, VisibilityToggle};

/// Vertical offset past which the back-to-top control appears.
pub const BACK_TO_TOP_THRESHOLD: f64 = 500.0;

/// Strictly greater than the threshold; sitting exactly on it stays hidden.
pub fn back_to_top_visible(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

pub struct ScrollToTop {
    button: Box<dyn VisibilityToggle>,
    viewport: Rc<dyn Viewport>,
    threshold: f64,
}

impl ScrollToTop {
    pub fn new(
        button: Box<dyn VisibilityToggle>,
        viewport: Rc<dyn Viewport>,
        threshold: f64,
    ) -> Self {
        Self {
            button,
            viewport,
            threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn on_scroll(&self, offset: f64) -> bool {
        let visible = back_to_top_visible(offset, self.threshold);
        self.button.set_visible(visible);
        visible
    }

    /// Scrolls whether or not the control is currently shown.
    pub fn on_click(&self) {
        self.viewport.scroll_to_top();
    }
}
