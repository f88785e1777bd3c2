/// Live preview of the product image picked in the admin form

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, Element, File, FileReader, HtmlImageElement, HtmlInputElement};

use crate::config::StorefrontConfig;
use crate::dom::{Listener, query};
use crate::error::{UiError, describe};
use crate::preview::{PreviewOutcome, PreviewRequests, is_image_type};
use crate::ui::components::{PreviewImage, PreviewImageProps};

/// Where previews go, shared between the listener and pending decodes
struct PreviewTargets {
    root: Option<Element>,
    image_selector: String,
    container_selector: String,
    requests: RefCell<PreviewRequests>,
}

impl PreviewTargets {
    fn show(&self, data_url: &str) -> PreviewOutcome {
        let Some(root) = &self.root else {
            return PreviewOutcome::NoTarget;
        };

        let existing = query(root, &self.image_selector)
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok());
        if let Some(image) = existing {
            image.set_src(data_url);
            return PreviewOutcome::Updated;
        }

        match query(root, &self.container_selector) {
            Some(container) => {
                yew::Renderer::<PreviewImage>::with_root_and_props(
                    container,
                    PreviewImageProps {
                        src: data_url.to_string().into(),
                    },
                )
                .render();
                PreviewOutcome::Injected
            }
            None => PreviewOutcome::NoTarget,
        }
    }
}

/// Watches the product image input and previews each picked image
pub struct ImagePreviewBinder {
    targets: Rc<PreviewTargets>,
    _change: Listener,
}

impl ImagePreviewBinder {
    /// Bind to the file input; `Ok(None)` when the page has no usable one
    pub fn attach(
        document: &Document,
        config: &StorefrontConfig,
    ) -> Result<Option<ImagePreviewBinder>, UiError> {
        let Some(input) = query(document, &config.file_input)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            return Ok(None);
        };
        if input.type_() != "file" {
            log::debug!("{} is not a file input, no preview", config.file_input);
            return Ok(None);
        }

        let targets = Rc::new(PreviewTargets {
            root: query(document, &config.preview_root),
            image_selector: config.preview_image.clone(),
            container_selector: config.preview_container.clone(),
            requests: RefCell::new(PreviewRequests::new()),
        });

        let listener_targets = targets.clone();
        let listener_input = input.clone();
        let change = Listener::new(&input, "change", move |_| {
            let Some(file) = listener_input.files().and_then(|files| files.get(0)) else {
                return Ok(());
            };

            let preview = start_preview(listener_targets.clone(), file);
            spawn_local(async move {
                match preview.await {
                    Ok(outcome) => log::debug!("Preview: {:?}", outcome),
                    Err(e) => log::warn!("Preview failed: {}", e),
                }
            });
            Ok(())
        })?;

        log::info!("Image preview bound to {}", config.file_input);
        Ok(Some(ImagePreviewBinder {
            targets,
            _change: change,
        }))
    }

    /// Preview `file` as if it had just been picked.
    ///
    /// The request is registered immediately; the returned future decodes
    /// the file and resolves to `Stale` if a later file was picked meanwhile.
    pub fn preview_file(
        &self,
        file: File,
    ) -> impl Future<Output = Result<PreviewOutcome, UiError>> + use<> {
        start_preview(self.targets.clone(), file)
    }
}

fn start_preview(
    targets: Rc<PreviewTargets>,
    file: File,
) -> impl Future<Output = Result<PreviewOutcome, UiError>> + 'static {
    let request = if is_image_type(&file.type_()) {
        Some(targets.requests.borrow_mut().begin())
    } else {
        log::debug!("Ignoring {} ({})", file.name(), file.type_());
        None
    };

    async move {
        let Some(request) = request else {
            return Ok(PreviewOutcome::Skipped);
        };

        let data_url = read_as_data_url(&file).await?;

        if !targets.requests.borrow().is_current(request) {
            return Ok(PreviewOutcome::Stale);
        }

        Ok(targets.show(&data_url))
    }
}

/// Decode a file into a `data:` URL
async fn read_as_data_url(file: &File) -> Result<String, UiError> {
    let reader = FileReader::new()?;

    let loaded = Promise::new(&mut |resolve, reject| {
        reader.set_onload(Some(&resolve));
        reader.set_onerror(Some(&reject));
    });
    reader.read_as_data_url(file)?;

    if let Err(e) = JsFuture::from(loaded).await {
        let reason = reader.error().map(|err| err.message()).unwrap_or_else(|| describe(&e));
        return Err(UiError::Decode(reason));
    }

    reader
        .result()?
        .as_string()
        .ok_or_else(|| UiError::Decode("reader result is not a string".to_string()))
}
