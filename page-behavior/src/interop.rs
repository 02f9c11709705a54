use std::rc::Rc;

use log::{debug, error};
use page_core::{PageController, PageResult};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, Window};

use crate::dom::{PageElements, WindowViewport};

/// Run `f` once the document structure is ready.
///
/// When the document has already parsed, `f` runs now and its error is
/// returned. Otherwise it runs on `DOMContentLoaded` and errors are logged.
pub fn on_document_ready<F>(document: &Document, f: F) -> Result<(), JsValue>
where
    F: FnOnce() -> PageResult<()> + 'static,
{
    if document.ready_state() != "loading" {
        return f().map_err(|e| JsValue::from_str(&e.to_string()));
    }

    let ready_closure = Closure::once(move |_e: Event| {
        if let Err(e) = f() {
            error!("Page behavior failed to start: {}", e);
        }
    });
    document.add_event_listener_with_callback(
        "DOMContentLoaded",
        ready_closure.as_ref().unchecked_ref(),
    )?;
    ready_closure.forget();
    Ok(())
}

/// Wire the controller to the page: theme toggle and filter clicks, window
/// scroll, and the back-to-top click.
pub fn attach(
    window: &Window,
    controller: Rc<PageController>,
    elements: &PageElements,
    viewport: Rc<WindowViewport>,
) -> Result<(), JsValue> {
    let toggle_controller = Rc::clone(&controller);
    on_click(&elements.theme_toggle, move || {
        toggle_controller.on_theme_toggle();
    })?;

    for (index, control) in elements.filter_controls.iter().enumerate() {
        let filter_controller = Rc::clone(&controller);
        on_click(control, move || {
            if let Err(e) = filter_controller.on_filter(index) {
                error!("Filter activation failed: {}", e);
            }
        })?;
    }

    let scroll_controller = Rc::clone(&controller);
    let scroll_closure = Closure::wrap(Box::new(move |_e: Event| {
        scroll_controller.on_scroll(viewport.scroll_y());
    }) as Box<dyn FnMut(Event)>);
    window.add_event_listener_with_callback("scroll", scroll_closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    scroll_closure.forget();

    let top_controller = Rc::clone(&controller);
    on_click(&elements.back_to_top, move || {
        top_controller.on_back_to_top();
    })?;

    debug!(
        "Attached listeners to {} filter controls",
        elements.filter_controls.len()
    );
    Ok(())
}

fn on_click(element: &Element, mut handler: impl FnMut() + 'static) -> Result<(), JsValue> {
    let click_closure = Closure::wrap(Box::new(move |_e: Event| {
        handler();
    }) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("click", click_closure.as_ref().unchecked_ref())?;
    click_closure.forget();
    Ok(())
}
