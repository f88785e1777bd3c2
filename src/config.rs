/// Page configuration: selectors, class names and lookup policy
use crate::error::UiError;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// What a tab click does when no section carries the tab's key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionLookup {
    /// Leave every marker untouched and log a warning
    #[default]
    Lenient,
    /// Move the tab marker, clear the sections, then throw
    Strict,
}

/// Selectors and class names the controllers look for.
///
/// Every field has a default matching the storefront templates, so a page
/// only passes the keys it overrides (camelCase, e.g. `{ sectionLookup: "strict" }`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorefrontConfig {
    pub file_input: String,
    pub preview_root: String,
    pub preview_image: String,
    pub preview_container: String,
    pub tab: String,
    pub section: String,
    pub category_attr: String,
    pub play_button: String,
    pub media_container: String,
    pub media_image: String,
    pub video: String,
    pub video_source_attr: String,
    pub active_class: String,
    pub hidden_class: String,
    pub section_lookup: SectionLookup,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        StorefrontConfig {
            file_input: r#"input[name="product_image"]"#.to_string(),
            preview_root: ".field-image_preview".to_string(),
            preview_image: "img".to_string(),
            preview_container: ".readonly".to_string(),
            tab: ".category-tab".to_string(),
            section: ".category-products".to_string(),
            category_attr: "data-category".to_string(),
            play_button: ".play-video-btn".to_string(),
            media_container: ".product-media".to_string(),
            media_image: "img".to_string(),
            video: ".product-video".to_string(),
            video_source_attr: "data-source".to_string(),
            active_class: "active".to_string(),
            hidden_class: "hidden".to_string(),
            section_lookup: SectionLookup::Lenient,
        }
    }
}

impl StorefrontConfig {
    /// Read a config object handed over by the page; `undefined` and `null` mean defaults
    pub fn from_js(value: JsValue) -> Result<Self, UiError> {
        if value.is_undefined() || value.is_null() {
            return Ok(StorefrontConfig::default());
        }

        serde_wasm_bindgen::from_value(value).map_err(|e| UiError::Config(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, UiError> {
        serde_json::from_str(json).map_err(|e| UiError::Config(e.to_string()))
    }
}
