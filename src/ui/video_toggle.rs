/// Product media: swap between the product image and its video

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, Element, HtmlElement, HtmlVideoElement, Location};

use crate::config::StorefrontConfig;
use crate::dom::{Listener, query, query_all};
use crate::error::{UiError, describe};
use crate::media::{MediaState, needs_source};

/// One media container and the button that toggles it
struct MediaContainer {
    button: HtmlElement,
    image: Option<Element>,
    video: Option<HtmlVideoElement>,
    image_selector: String,
    source_attr: String,
    active_class: String,
    hidden_class: String,
    location: Location,
}

impl MediaContainer {
    /// Handle a button click; `None` when the container has no video
    fn toggle(&self) -> Result<Option<MediaState>, UiError> {
        let Some(video) = &self.video else {
            return Ok(None);
        };
        let image = self
            .image
            .as_ref()
            .ok_or_else(|| UiError::MissingElement(self.image_selector.clone()))?;

        self.load_source(video)?;

        let state = MediaState::from_video_active(video.class_list().contains(&self.active_class));
        match state {
            MediaState::ShowingVideo => {
                video.pause()?;
                video.class_list().remove_1(&self.active_class)?;
                image.class_list().remove_1(&self.hidden_class)?;
            }
            MediaState::ShowingImage => {
                video.class_list().add_1(&self.active_class)?;
                image.class_list().add_1(&self.hidden_class)?;
            }
        }

        let next = state.toggled();
        self.show_face(next);

        if next == MediaState::ShowingVideo {
            play(video);
        }
        Ok(Some(next))
    }

    /// Playback finished on its own: back to the image
    fn ended(&self) -> Result<(), UiError> {
        let (Some(video), Some(image)) = (&self.video, &self.image) else {
            return Ok(());
        };
        if !video.class_list().contains(&self.active_class) {
            return Ok(());
        }

        video.class_list().remove_1(&self.active_class)?;
        image.class_list().remove_1(&self.hidden_class)?;
        self.show_face(MediaState::ShowingImage);
        Ok(())
    }

    fn load_source(&self, video: &HtmlVideoElement) -> Result<(), UiError> {
        let page = self.location.href()?;
        if !needs_source(&video.src(), &page) {
            return Ok(());
        }

        match video.get_attribute(&self.source_attr) {
            Some(source) => video.set_src(&source),
            None => log::debug!("Video has no {} attribute", self.source_attr),
        }
        Ok(())
    }

    fn show_face(&self, state: MediaState) {
        let face = state.face();
        self.button.set_inner_html(face.icon);
        self.button.set_title(face.label);
    }
}

fn play(video: &HtmlVideoElement) {
    match video.play() {
        Ok(started) => spawn_local(async move {
            if let Err(e) = JsFuture::from(started).await {
                log::warn!("Video playback did not start: {}", describe(&e));
            }
        }),
        Err(e) => log::warn!("Video playback did not start: {}", describe(&e)),
    }
}

/// Click and `ended` handlers for every product media container
pub struct VideoToggleController {
    containers: usize,
    _listeners: Vec<Listener>,
}

impl VideoToggleController {
    pub fn attach(document: &Document, config: &StorefrontConfig) -> Result<VideoToggleController, UiError> {
        let location = document.location().ok_or(UiError::NoDocument)?;
        let mut listeners = Vec::new();
        let mut containers = 0;

        for button in query_all(document, &config.play_button) {
            let Ok(button) = button.dyn_into::<HtmlElement>() else {
                continue;
            };
            let Some(media) = button.closest(&config.media_container)? else {
                log::debug!("Play button outside {}, skipped", config.media_container);
                continue;
            };

            let container = Rc::new(MediaContainer {
                image: query(&media, &config.media_image),
                video: query(&media, &config.video)
                    .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok()),
                button: button.clone(),
                image_selector: config.media_image.clone(),
                source_attr: config.video_source_attr.clone(),
                active_class: config.active_class.clone(),
                hidden_class: config.hidden_class.clone(),
                location: location.clone(),
            });

            let on_click = container.clone();
            listeners.push(Listener::new(&button, "click", move |event| {
                event.stop_propagation();
                if let Err(e) = on_click.toggle() {
                    log::warn!("Video toggle ignored: {}", e);
                }
                Ok(())
            })?);

            if let Some(video) = &container.video {
                let on_ended = container.clone();
                listeners.push(Listener::new(video, "ended", move |_| {
                    if let Err(e) = on_ended.ended() {
                        log::warn!("Could not restore product image: {}", e);
                    }
                    Ok(())
                })?);
            }

            containers += 1;
        }

        log::info!("Video toggles bound: {} media containers", containers);

        Ok(VideoToggleController {
            containers,
            _listeners: listeners,
        })
    }

    pub fn container_count(&self) -> usize {
        self.containers
    }
}
