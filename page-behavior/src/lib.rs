//! Browser binding for the digest page behaviors.
//!
//! Looks up the page elements, builds a [`PageController`] over `web-sys`
//! handles and attaches the event listeners once the document is ready.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Once;

use log::{debug, error, info};
use page_core::{PageController, PageError, PageResult};
use wasm_bindgen::prelude::*;

pub mod config;
pub mod dom;
pub mod interop;

pub use config::*;
pub use dom::*;
pub use interop::*;

static LOGGER: Once = Once::new();

thread_local! {
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

/// JS entry point. Safe to call before the document has finished parsing.
///
/// Only the first call wires the page; later calls are no-ops so listeners
/// are never attached twice.
#[wasm_bindgen(js_name = initPageBehavior)]
pub fn init_page_behavior() -> Result<(), JsValue> {
    LOGGER.call_once(|| wasm_logger::init(wasm_logger::Config::default()));

    if STARTED.with(|started| started.replace(true)) {
        debug!("initPageBehavior already called; skipping");
        return Ok(());
    }

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document on window"))?;

    on_document_ready(&document, || {
        boot().map(|_| ()).map_err(|e| {
            error!("Page behavior failed to start: {}", e);
            e
        })
    })
}

/// Build the controller from the current document and attach its listeners.
pub fn boot() -> PageResult<Rc<PageController>> {
    let window = web_sys::window().ok_or_else(|| PageError::missing("window"))?;
    let document = window
        .document()
        .ok_or_else(|| PageError::missing("document"))?;

    let config = load_page_config(&document);
    let elements = PageElements::query(&document, &config)?;
    let viewport = Rc::new(WindowViewport::new(&window));
    let handles = elements.handles(&window, &document, Rc::clone(&viewport), &config)?;
    let controller = Rc::new(PageController::assemble(handles, &config));

    controller.init(&MediaQuerySignal::new(&window));
    // A reload can restore a scrolled position before any scroll event fires.
    controller.on_scroll(viewport.scroll_y());

    attach(&window, Rc::clone(&controller), &elements, viewport)
        .map_err(|e| PageError::Listener(format!("{:?}", e)))?;

    info!(
        "Page behavior ready: {} filter controls, {} items",
        controller.filter().control_count(),
        controller.filter().item_count()
    );
    Ok(controller)
}
