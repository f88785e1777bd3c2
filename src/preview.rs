/// Image preview bookkeeping: MIME filtering and last-selection-wins tracking

/// Inline style of an injected preview image
pub const PREVIEW_STYLE: &str =
    "max-height:300px;max-width:100%;border-radius:8px;box-shadow:0 2px 8px rgba(0,0,0,.15)";

/// Whether a declared content type is something the preview can show
pub fn is_image_type(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Identifies one file decode; larger ids were issued later
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestId(u64);

/// Monotonic counter of decode requests.
///
/// A decode that completes after a newer one was started is stale and must
/// not touch the preview.
#[derive(Debug, Default)]
pub struct PreviewRequests {
    latest: u64,
}

impl PreviewRequests {
    pub fn new() -> Self {
        PreviewRequests { latest: 0 }
    }

    pub fn begin(&mut self) -> RequestId {
        self.latest += 1;
        RequestId(self.latest)
    }

    pub fn is_current(&self, id: RequestId) -> bool {
        id.0 == self.latest
    }
}

/// What happened to a selected file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewOutcome {
    /// The existing preview image now shows the file
    Updated,
    /// A new preview image was scheduled to render into the preview container
    Injected,
    /// Decoded, but the page has neither a preview image nor a container
    NoTarget,
    /// A later selection superseded this one before it finished decoding
    Stale,
    /// Not an image
    Skipped,
}
