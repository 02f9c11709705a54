use log::{debug, warn};
use page_core::PageConfig;
use web_sys::Document;

/// `<script type="application/json" id="page-behavior-config">` overriding the defaults.
pub const CONFIG_ELEMENT_ID: &str = "page-behavior-config";

/// Page-provided config, or the defaults when absent or invalid.
pub fn load_page_config(document: &Document) -> PageConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return PageConfig::default();
    };

    match PageConfig::from_json(&raw) {
        Ok(config) => {
            debug!("Loaded page config from #{}", CONFIG_ELEMENT_ID);
            config
        }
        Err(e) => {
            warn!("Ignoring #{}: {}; using defaults", CONFIG_ELEMENT_ID, e);
            PageConfig::default()
        }
    }
}
