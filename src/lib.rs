/// Storefront UI - admin image preview, catalog category tabs and product video toggles
/// Built with Rust + WASM + Yew

mod catalog;
mod config;
mod dom;
mod error;
mod media;
mod preview;
pub mod ui;

use std::any::Any;
use std::cell::RefCell;

use wasm_bindgen::prelude::*;

pub use config::{SectionLookup, StorefrontConfig};
pub use error::UiError;
pub use preview::PreviewOutcome;
use ui::{CategoryTabSwitcher, ImagePreviewBinder, VideoToggleController};

thread_local! {
    // Controllers live until `stop_all`; dropping one detaches its listeners
    static ATTACHED: RefCell<Vec<Box<dyn Any>>> = RefCell::new(Vec::new());
}

fn keep<T: 'static>(controller: T) {
    ATTACHED.with(|attached| attached.borrow_mut().push(Box::new(controller)));
}

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

#[wasm_bindgen]
pub fn is_image_type(mime: &str) -> bool {
    preview::is_image_type(mime)
}

// Live preview for the admin product form
#[wasm_bindgen]
pub fn start_admin_preview(config: JsValue) -> Result<(), JsValue> {
    let config = StorefrontConfig::from_js(config)?;
    let document = dom::document()?;

    dom::on_document_ready(&document.clone(), move || {
        match ImagePreviewBinder::attach(&document, &config) {
            Ok(Some(binder)) => keep(binder),
            Ok(None) => log::debug!("No product image input on this page"),
            Err(e) => log::error!("Image preview not bound: {}", e),
        }
    })?;
    Ok(())
}

// Category tabs and video toggles for the catalog page
#[wasm_bindgen]
pub fn start_catalog(config: JsValue) -> Result<(), JsValue> {
    let config = StorefrontConfig::from_js(config)?;
    let document = dom::document()?;

    dom::on_document_ready(&document.clone(), move || {
        match CategoryTabSwitcher::attach(&document, &config) {
            Ok(tabs) => keep(tabs),
            Err(e) => log::error!("Category tabs not bound: {}", e),
        }
        match VideoToggleController::attach(&document, &config) {
            Ok(videos) => keep(videos),
            Err(e) => log::error!("Video toggles not bound: {}", e),
        }
    })?;
    Ok(())
}

// Detach every controller started on this page
#[wasm_bindgen]
pub fn stop_all() {
    let detached = ATTACHED.with(|attached| attached.borrow_mut().drain(..).count());
    log::debug!("Detached {} controllers", detached);
}
