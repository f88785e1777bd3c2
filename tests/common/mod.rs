#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Promise, Uint8Array};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, ErrorEvent, File, FilePropertyBag, HtmlElement};

pub fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Replace the page body with `html`
pub fn fixture(html: &str) -> Document {
    let document = document();
    document.body().unwrap().set_inner_html(html);
    document
}

pub fn element(document: &Document, selector: &str) -> Element {
    document
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("fixture has no {}", selector))
}

pub fn html_element(document: &Document, selector: &str) -> HtmlElement {
    element(document, selector).dyn_into::<HtmlElement>().unwrap()
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub fn file(bytes: &[u8], name: &str, mime: &str) -> File {
    let parts = Array::of1(&Uint8Array::from(bytes));
    let options = FilePropertyBag::new();
    options.set_type(mime);
    File::new_with_u8_array_sequence_and_options(&parts, name, &options).unwrap()
}

/// Wait for queued tasks (yew renders, file reads) to run
pub async fn next_tick() {
    let promise = Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

/// Catches errors thrown by event listeners so they don't reach the console
pub struct ErrorTrap {
    messages: Rc<RefCell<Vec<String>>>,
    closure: Closure<dyn FnMut(ErrorEvent)>,
}

impl ErrorTrap {
    pub fn install() -> ErrorTrap {
        let messages = Rc::new(RefCell::new(Vec::new()));
        let seen = messages.clone();
        let closure = Closure::<dyn FnMut(ErrorEvent)>::new(move |event: ErrorEvent| {
            event.prevent_default();
            seen.borrow_mut().push(event.message());
        });
        web_sys::window()
            .unwrap()
            .add_event_listener_with_callback("error", closure.as_ref().unchecked_ref())
            .unwrap();

        ErrorTrap { messages, closure }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Drop for ErrorTrap {
    fn drop(&mut self) {
        let _ = web_sys::window()
            .unwrap()
            .remove_event_listener_with_callback("error", self.closure.as_ref().unchecked_ref());
    }
}
