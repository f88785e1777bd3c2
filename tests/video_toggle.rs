#![cfg(target_arch = "wasm32")]

mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::{element, fixture, has_class, html_element};
use storefront_ui::StorefrontConfig;
use storefront_ui::ui::VideoToggleController;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, HtmlVideoElement};

wasm_bindgen_test_configure!(run_in_browser);

const PRODUCT: &str = r#"
    <div class="product-card">
        <div class="product-media">
            <img src="boot.jpg" alt="Boot">
            <video class="product-video" data-source="clip.mp4"></video>
            <button class="play-video-btn" title="Play video">&#9654;</button>
            <a class="download-video-btn" href="clip.mp4" download>Download</a>
        </div>
    </div>
"#;

fn video(document: &Document) -> HtmlVideoElement {
    element(document, ".product-video")
        .dyn_into::<HtmlVideoElement>()
        .unwrap()
}

fn showing_video(document: &Document) -> bool {
    let image_hidden = has_class(&element(document, ".product-media img"), "hidden");
    let video_active = has_class(&element(document, ".product-video"), "active");
    assert_eq!(image_hidden, video_active, "image and video visible together");
    video_active
}

fn button_title(document: &Document) -> String {
    html_element(document, ".play-video-btn").title()
}

#[wasm_bindgen_test]
fn test_click_shows_video_and_loads_source() {
    let document = fixture(PRODUCT);
    let controller = VideoToggleController::attach(&document, &StorefrontConfig::default()).unwrap();
    assert_eq!(controller.container_count(), 1);
    assert_eq!(video(&document).src(), "");

    html_element(&document, ".play-video-btn").click();

    assert!(showing_video(&document));
    assert_eq!(button_title(&document), "Back to image");
    assert!(html_element(&document, ".play-video-btn").inner_html().contains("M19 6.41"));
    assert!(video(&document).src().ends_with("/clip.mp4"));
}

#[wasm_bindgen_test]
fn test_click_parity() {
    let document = fixture(PRODUCT);
    let _controller = VideoToggleController::attach(&document, &StorefrontConfig::default()).unwrap();
    let button = html_element(&document, ".play-video-btn");

    for clicks in 1..=4 {
        button.click();
        if clicks % 2 == 0 {
            assert!(!showing_video(&document));
            assert_eq!(button_title(&document), "Play video");
            assert!(button.inner_html().contains("M8 5v14l11-7z"));
        } else {
            assert!(showing_video(&document));
            assert_eq!(button_title(&document), "Back to image");
        }
    }
}

#[wasm_bindgen_test]
fn test_existing_source_is_kept() {
    let document = fixture(
        r#"
        <div class="product-media">
            <img src="boot.jpg">
            <video class="product-video" src="preloaded.mp4" data-source="clip.mp4"></video>
            <button class="play-video-btn"></button>
        </div>
    "#,
    );
    let _controller = VideoToggleController::attach(&document, &StorefrontConfig::default()).unwrap();

    html_element(&document, ".play-video-btn").click();

    assert!(video(&document).src().ends_with("/preloaded.mp4"));
}

#[wasm_bindgen_test]
fn test_ended_returns_to_image() {
    let document = fixture(PRODUCT);
    let _controller = VideoToggleController::attach(&document, &StorefrontConfig::default()).unwrap();

    html_element(&document, ".play-video-btn").click();
    assert!(showing_video(&document));

    video(&document)
        .dispatch_event(&Event::new("ended").unwrap())
        .unwrap();

    assert!(!showing_video(&document));
    assert_eq!(button_title(&document), "Play video");

    // Toggling still starts from the image after an unassisted end
    html_element(&document, ".play-video-btn").click();
    assert!(showing_video(&document));
}

#[wasm_bindgen_test]
fn test_ended_after_toggle_back_is_harmless() {
    let document = fixture(PRODUCT);
    let _controller = VideoToggleController::attach(&document, &StorefrontConfig::default()).unwrap();
    let button = html_element(&document, ".play-video-btn");

    button.click();
    button.click();
    button.click();
    button.click();
    video(&document)
        .dispatch_event(&Event::new("ended").unwrap())
        .unwrap();

    assert!(!showing_video(&document));
    assert_eq!(button_title(&document), "Play video");
}

#[wasm_bindgen_test]
fn test_click_does_not_reach_container() {
    let document = fixture(PRODUCT);
    let _controller = VideoToggleController::attach(&document, &StorefrontConfig::default()).unwrap();

    let reached = Rc::new(Cell::new(0));
    let counter = reached.clone();
    let on_card = Closure::<dyn FnMut()>::new(move || counter.set(counter.get() + 1));
    element(&document, ".product-card")
        .add_event_listener_with_callback("click", on_card.as_ref().unchecked_ref())
        .unwrap();

    html_element(&document, ".play-video-btn").click();
    assert_eq!(reached.get(), 0);

    html_element(&document, ".product-media img").click();
    assert_eq!(reached.get(), 1);
}

#[wasm_bindgen_test]
fn test_container_without_video() {
    let document = fixture(
        r#"
        <div class="product-media">
            <img src="boot.jpg">
            <button class="play-video-btn" title="Play video"></button>
        </div>
    "#,
    );
    let _controller = VideoToggleController::attach(&document, &StorefrontConfig::default()).unwrap();

    html_element(&document, ".play-video-btn").click();

    assert!(!has_class(&element(&document, "img"), "hidden"));
    assert_eq!(button_title(&document), "Play video");
}

#[wasm_bindgen_test]
fn test_container_without_image_is_a_no_op() {
    let document = fixture(
        r#"
        <div class="product-media">
            <video class="product-video" data-source="clip.mp4"></video>
            <button class="play-video-btn" title="Play video"></button>
        </div>
    "#,
    );
    let _controller = VideoToggleController::attach(&document, &StorefrontConfig::default()).unwrap();

    html_element(&document, ".play-video-btn").click();

    assert!(!has_class(&element(&document, ".product-video"), "active"));
    assert_eq!(video(&document).src(), "");
}

#[wasm_bindgen_test]
fn test_button_outside_media_is_skipped() {
    let document = fixture(
        r#"
        <button class="play-video-btn"></button>
        <div class="product-media">
            <img src="boot.jpg">
            <video class="product-video" data-source="clip.mp4"></video>
            <button class="play-video-btn"></button>
        </div>
    "#,
    );
    let controller = VideoToggleController::attach(&document, &StorefrontConfig::default()).unwrap();

    assert_eq!(controller.container_count(), 1);
}

#[wasm_bindgen_test]
fn test_containers_toggle_independently() {
    let document = fixture(
        r#"
        <div class="product-media" id="first">
            <img src="boot.jpg">
            <video class="product-video" data-source="boot.mp4"></video>
            <button class="play-video-btn"></button>
        </div>
        <div class="product-media" id="second">
            <img src="bag.jpg">
            <video class="product-video" data-source="bag.mp4"></video>
            <button class="play-video-btn"></button>
        </div>
    "#,
    );
    let controller = VideoToggleController::attach(&document, &StorefrontConfig::default()).unwrap();
    assert_eq!(controller.container_count(), 2);

    html_element(&document, "#second .play-video-btn").click();

    assert!(!has_class(&element(&document, "#first .product-video"), "active"));
    assert!(has_class(&element(&document, "#second .product-video"), "active"));
    assert!(has_class(&element(&document, "#second img"), "hidden"));
}

#[wasm_bindgen_test]
fn test_dropped_controller_detaches() {
    let document = fixture(PRODUCT);
    let controller = VideoToggleController::attach(&document, &StorefrontConfig::default()).unwrap();
    html_element(&document, ".play-video-btn").click();
    assert!(showing_video(&document));
    drop(controller);

    html_element(&document, ".play-video-btn").click();
    assert!(showing_video(&document));
    assert_eq!(button_title(&document), "Back to image");

    video(&document)
        .dispatch_event(&Event::new("ended").unwrap())
        .unwrap();
    assert!(showing_video(&document));
}
