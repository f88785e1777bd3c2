/// Product media toggle: image/video state and the play button's face
use url::Url;

pub const PLAY_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="white"><path d="M8 5v14l11-7z"/></svg>"#;

pub const CLOSE_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="white"><path d="M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z"/></svg>"#;

/// Which half of a media container is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaState {
    ShowingImage,
    ShowingVideo,
}

/// Icon markup and accessible label of the toggle button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonFace {
    pub icon: &'static str,
    pub label: &'static str,
}

impl MediaState {
    /// The state is encoded by the video's active class
    pub fn from_video_active(active: bool) -> MediaState {
        if active {
            MediaState::ShowingVideo
        } else {
            MediaState::ShowingImage
        }
    }

    pub fn toggled(self) -> MediaState {
        match self {
            MediaState::ShowingImage => MediaState::ShowingVideo,
            MediaState::ShowingVideo => MediaState::ShowingImage,
        }
    }

    /// Button face shown while in this state
    pub fn face(self) -> ButtonFace {
        match self {
            MediaState::ShowingImage => ButtonFace {
                icon: PLAY_ICON,
                label: "Play video",
            },
            MediaState::ShowingVideo => ButtonFace {
                icon: CLOSE_ICON,
                label: "Back to image",
            },
        }
    }
}

/// Whether a video still needs its source assigned.
///
/// An unset `src` reads back as empty, or as the page address when the
/// attribute is present but blank.
pub fn needs_source(current_src: &str, page_href: &str) -> bool {
    if current_src.is_empty() {
        return true;
    }

    match (Url::parse(current_src), Url::parse(page_href)) {
        (Ok(src), Ok(page)) => src == page,
        _ => current_src == page_href,
    }
}
