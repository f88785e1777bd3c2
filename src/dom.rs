/// DOM helpers: optional lookups, owned event listeners, document readiness
use crate::error::{UiError, describe};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, NodeList, Window};

pub fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> Result<Document, UiError> {
    window()?.document().ok_or(UiError::NoDocument)
}

/// Something selectors can be run against
pub trait Scope {
    fn select_first(&self, selector: &str) -> Result<Option<Element>, JsValue>;
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue>;
}

impl Scope for Document {
    fn select_first(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

impl Scope for Element {
    fn select_first(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

/// First element matching `selector`; an invalid selector counts as no match
pub fn query(scope: &impl Scope, selector: &str) -> Option<Element> {
    match scope.select_first(selector) {
        Ok(found) => found,
        Err(e) => {
            log::warn!("Invalid selector {:?}: {}", selector, describe(&e));
            None
        }
    }
}

/// Every element matching `selector`, in document order
pub fn query_all(scope: &impl Scope, selector: &str) -> Vec<Element> {
    match scope.select_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(e) => {
            log::warn!("Invalid selector {:?}: {}", selector, describe(&e));
            Vec::new()
        }
    }
}

/// Event handler; an `Err` is rethrown to the page
pub type Handler = dyn FnMut(Event) -> Result<(), JsValue>;

/// An event listener that stays registered for as long as it lives
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<Handler>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Listener, UiError>
    where
        F: FnMut(Event) -> Result<(), JsValue> + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<Handler>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;

        Ok(Listener {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Run `f` once the document has been parsed.
///
/// If `DOMContentLoaded` already fired, `f` runs immediately.
pub fn on_document_ready<F>(document: &Document, f: F) -> Result<(), UiError>
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }

    let callback = Closure::once_into_js(f);
    document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
    Ok(())
}
