use crate::geometry::state::{ScrollState, StaticStyle, TransformVector};
use crate::options::color::HexColor;
use crate::options::config::ImageMeta;

/// Why the host could not fetch the background image.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to load background image `{src}`: {reason}")]
pub struct ImageLoadFailure {
    pub src: String,
    pub reason: String,
}

impl ImageLoadFailure {
    pub fn new(src: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            reason: reason.into(),
        }
    }
}

/// Everything the host needs to paint a static background in one call.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticBackground<'a> {
    pub color: Option<&'a HexColor>,
    pub image: Option<&'a ImageMeta>,
    pub style: StaticStyle,
    pub transform: TransformVector,
}

/// Page-side effects driven by [`crate::RenderCoordinator`].
///
/// A DOM binding implements this against the live page. Calls are fire-and-forget; results
/// come back through the coordinator's `on_*` methods.
pub trait RenderHost {
    /// Current scroll offsets plus viewport and document extents.
    fn measure(&self) -> ScrollState;

    /// Start fetching `src`; completion is reported via `on_image_loaded`.
    fn load_image(&mut self, src: &str);

    fn create_image_container(&mut self, selector: &str, image: &ImageMeta);

    fn create_overlay(&mut self, selector: &str, url: &str, opacity: f64);

    fn apply_static_background(&mut self, selector: &str, background: &StaticBackground<'_>);

    fn apply_transform(&mut self, transform: &TransformVector);

    /// Attach scroll and resize listeners.
    fn subscribe(&mut self);

    fn unsubscribe(&mut self);

    /// Ask for exactly one `on_animation_frame` callback at the next display tick.
    fn request_animation_frame(&mut self);
}
