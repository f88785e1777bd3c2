/// UI module exports
pub mod category_tabs;
pub mod components;
pub mod image_preview;
pub mod video_toggle;

pub use category_tabs::CategoryTabSwitcher;
pub use image_preview::ImagePreviewBinder;
pub use video_toggle::VideoToggleController;
