//! Browser tests for the page binding.
//!
//! Run with: wasm-pack test --headless --firefox page-behavior

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use page_behavior::{boot, init_page_behavior, load_page_config, on_document_ready};
use page_core::{MatchRule, PageConfig, PageError};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

const DIGEST_PAGE: &str = r#"
<button id="themeToggle">Theme</button>
<nav>
  <button class="filter-btn active" data-category="all">All</button>
  <button class="filter-btn" data-category="sports">Sports</button>
  <button class="filter-btn" data-category="tech">Tech</button>
</nav>
<article id="a" class="headline-card" data-category="sports">A</article>
<ul>
  <li id="b" class="list-item" data-category="tech">B</li>
  <li id="c" class="list-item category-sports" data-category="tech">C</li>
  <li id="d" class="list-item" data-category="sports">D</li>
</ul>
<button id="backToTop">Top</button>
"#;

const DOUBLE_MATCHED_ITEM: &str = r#"
<button id="themeToggle">Theme</button>
<button class="filter-btn" data-category="all">All</button>
<article class="headline-card list-item" data-category="sports">A</article>
<li class="list-item" data-category="tech">B</li>
<button id="backToTop">Top</button>
"#;

const BACK_TO_TOP: &str = r#"<button id="backToTop">Top</button>"#;

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Replace the body and reset the theme attribute and storage.
fn mount(html: &str, config: Option<&str>) -> Document {
    let window = web_sys::window().unwrap();
    let document = document();
    let config_script = config
        .map(|json| {
            format!(r#"<script type="application/json" id="page-behavior-config">{json}</script>"#)
        })
        .unwrap_or_default();
    document
        .body()
        .unwrap()
        .set_inner_html(&format!("{config_script}{html}"));
    document
        .document_element()
        .unwrap()
        .remove_attribute("data-theme")
        .unwrap();
    window.local_storage().unwrap().unwrap().clear().unwrap();
    document
}

fn element(document: &Document, selector: &str) -> HtmlElement {
    document
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn is_hidden(document: &Document, id: &str) -> bool {
    element(document, &format!("#{id}"))
        .style()
        .get_property_value("display")
        .unwrap()
        == "none"
}

fn stored_theme() -> Option<String> {
    web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap()
        .get_item("theme")
        .unwrap()
}

#[wasm_bindgen_test]
fn persisted_theme_is_applied_and_toggled() {
    let document = mount(DIGEST_PAGE, None);
    web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap()
        .set_item("theme", "light")
        .unwrap();

    boot().unwrap();
    let root = document.document_element().unwrap();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));

    let toggle = element(&document, "#themeToggle");
    toggle.click();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(stored_theme().as_deref(), Some("dark"));

    toggle.click();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));
    assert_eq!(stored_theme().as_deref(), Some("light"));
}

#[wasm_bindgen_test]
fn filter_click_marks_one_control_and_hides_others() {
    let document = mount(DIGEST_PAGE, Some(r#"{"reveal_delay_ms": 0}"#));
    boot().unwrap();

    element(&document, r#".filter-btn[data-category="sports"]"#).click();

    let active = document.query_selector_all(".filter-btn.active").unwrap();
    assert_eq!(active.length(), 1);
    assert!(!is_hidden(&document, "a"));
    assert!(is_hidden(&document, "b"));
    assert!(is_hidden(&document, "c"));
    assert!(!is_hidden(&document, "d"));
    assert_eq!(
        element(&document, "#b").style().get_property_value("opacity").unwrap(),
        "0"
    );
}

#[wasm_bindgen_test]
fn marker_rule_from_page_config() {
    let document = mount(
        DIGEST_PAGE,
        Some(r#"{"match_rule": "exact_or_marker", "reveal_delay_ms": 0}"#),
    );
    let controller = boot().unwrap();
    assert_eq!(controller.filter().rule(), MatchRule::ExactOrMarker);

    element(&document, r#".filter-btn[data-category="sports"]"#).click();

    assert!(!is_hidden(&document, "c"));
    assert!(is_hidden(&document, "b"));
}

#[wasm_bindgen_test]
async fn shown_items_regain_opacity_after_delay() {
    let document = mount(DIGEST_PAGE, None);
    boot().unwrap();

    element(&document, r#".filter-btn[data-category="tech"]"#).click();
    assert!(is_hidden(&document, "a"));

    element(&document, r#".filter-btn[data-category="all"]"#).click();
    let card = element(&document, "#a");
    assert_eq!(card.style().get_property_value("display").unwrap(), "");
    assert_eq!(card.style().get_property_value("opacity").unwrap(), "0");

    TimeoutFuture::new(50).await;
    assert_eq!(card.style().get_property_value("opacity").unwrap(), "1");
}

#[wasm_bindgen_test]
fn back_to_top_class_follows_offset() {
    let document = mount(DIGEST_PAGE, None);
    let controller = boot().unwrap();
    let button = element(&document, "#backToTop");

    controller.on_scroll(501.0);
    assert!(button.class_list().contains("visible"));

    controller.on_scroll(500.0);
    assert!(!button.class_list().contains("visible"));
}

#[wasm_bindgen_test]
async fn window_scroll_and_click_drive_back_to_top() {
    let window = web_sys::window().unwrap();
    let document = mount(
        &format!(r#"{DIGEST_PAGE}<div style="height: 4000px"></div>"#),
        None,
    );
    window.scroll_to_with_x_and_y(0.0, 0.0);
    boot().unwrap();
    let button = element(&document, "#backToTop");
    assert!(!button.class_list().contains("visible"));

    window.scroll_to_with_x_and_y(0.0, 600.0);
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    assert!(button.class_list().contains("visible"));

    button.click();
    TimeoutFuture::new(1000).await;
    assert!(window.scroll_y().unwrap() < 600.0);

    window.scroll_to_with_x_and_y(0.0, 0.0);
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    assert!(!button.class_list().contains("visible"));
}

#[wasm_bindgen_test]
fn document_ready_runs_immediately_once_parsed() {
    let ran = Rc::new(Cell::new(false));
    let ran_flag = Rc::clone(&ran);

    on_document_ready(&document(), move || {
        ran_flag.set(true);
        Ok(())
    })
    .unwrap();

    assert!(ran.get());
}

#[wasm_bindgen_test]
fn repeated_init_attaches_listeners_once() {
    let document = mount(DIGEST_PAGE, None);
    web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap()
        .set_item("theme", "light")
        .unwrap();

    init_page_behavior().unwrap();
    init_page_behavior().unwrap();
    element(&document, "#themeToggle").click();

    let root = document.document_element().unwrap();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(stored_theme().as_deref(), Some("dark"));
}

#[wasm_bindgen_test]
fn item_matched_by_two_selectors_counts_once() {
    mount(DOUBLE_MATCHED_ITEM, Some(r#"{"reveal_delay_ms": 0}"#));
    let controller = boot().unwrap();

    assert_eq!(controller.filter().item_count(), 2);
    let outcome = controller.on_filter(0).unwrap();
    assert_eq!((outcome.shown, outcome.hidden), (2, 0));
}

#[wasm_bindgen_test]
fn missing_theme_toggle_fails_fast() {
    mount(BACK_TO_TOP, None);

    match boot() {
        Err(PageError::MissingElement { selector }) => assert_eq!(selector, "#themeToggle"),
        other => panic!("expected missing element, got {:?}", other.map(|_| ())),
    }
}

#[wasm_bindgen_test]
fn invalid_config_blob_falls_back_to_defaults() {
    let document = mount(DIGEST_PAGE, Some("{not json"));

    assert_eq!(load_page_config(&document), PageConfig::default());
}
