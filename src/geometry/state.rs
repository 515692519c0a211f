use crate::foundation::core::{Affine, Size, Vec2, finite_or_zero, size_of};
use serde::{Deserialize, Serialize};

/// Live page metrics, refreshed by scroll and resize signals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    pub scroll_top: f64,
    pub scroll_left: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Full scrollable width of the page body.
    pub document_width: f64,
    /// Full scrollable height of the page body.
    pub document_height: f64,
}

impl ScrollState {
    pub fn new(viewport: Size, document: Size) -> Self {
        Self {
            scroll_top: 0.0,
            scroll_left: 0.0,
            viewport_width: viewport.width,
            viewport_height: viewport.height,
            document_width: document.width,
            document_height: document.height,
        }
    }

    pub fn with_scroll(mut self, top: f64, left: f64) -> Self {
        self.scroll_top = top;
        self.scroll_left = left;
        self
    }

    pub fn viewport(&self) -> Size {
        size_of(self.viewport_width, self.viewport_height)
    }

    pub fn document(&self) -> Size {
        size_of(self.document_width, self.document_height)
    }

    pub fn scroll(&self) -> Vec2 {
        Vec2::new(finite_or_zero(self.scroll_left), finite_or_zero(self.scroll_top))
    }
}

/// Pixel offset and edge anchors for the image container.
///
/// Anchors are CSS `left/top/right/bottom` values; `None` leaves the property unset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformVector {
    pub dx: f64,
    pub dy: f64,
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
}

impl TransformVector {
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.dx, self.dy)
    }

    pub fn affine(&self) -> Affine {
        Affine::translate(self.offset())
    }

    /// `translate3d(..)` value for the `transform` style property.
    pub fn css_transform(&self) -> String {
        format!("translate3d({}px, {}px, 0)", fmt_px(self.dx), fmt_px(self.dy))
    }

    /// `true` when every component is finite.
    pub fn is_finite(&self) -> bool {
        let anchors = [self.left, self.top, self.right, self.bottom];
        self.dx.is_finite()
            && self.dy.is_finite()
            && anchors.iter().flatten().all(|v| v.is_finite())
    }
}

/// Round to hundredths for style strings.
fn fmt_px(v: f64) -> String {
    let r = (finite_or_zero(v) * 100.0).round() / 100.0;
    // Avoid "-0" in style strings.
    let r = if r == 0.0 { 0.0 } else { r };
    format!("{r}")
}

/// Pass-through CSS keywords for static mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StaticStyle {
    pub background_repeat: &'static str,
    pub background_position_x: &'static str,
    pub background_position_y: &'static str,
    pub background_attachment: &'static str,
}
