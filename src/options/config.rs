use crate::foundation::core::{Size, size_of};
use crate::options::color::HexColor;
use crate::options::tokens::{
    Attachment, Direction, HorizontalPosition, HorizontalScrollDirection, OverlayImage,
    OverlayOpacity, Repeat, ScrollDirection, VerticalPosition, VerticalScrollDirection,
};
use serde::{Deserialize, Serialize};

/// Background image metadata from the media library.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMeta {
    /// Reference the image was looked up by (empty when rebuilt from a client payload).
    pub attachment_ref: String,
    /// Public URL of the full-size image.
    pub url: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageMeta {
    pub fn size(&self) -> Size {
        size_of(f64::from(self.width), f64::from(self.height))
    }
}

/// Plain CSS background options used when parallax is off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticOptions {
    pub repeat: Repeat,
    pub position_x: HorizontalPosition,
    pub position_y: VerticalPosition,
    pub attachment: Attachment,
}

/// Scroll-coupled motion options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParallaxOptions {
    /// Only ever `true` for an image that passed the eligibility gate.
    pub enabled: bool,
    pub direction: Direction,
    pub vertical_scroll_direction: VerticalScrollDirection,
    pub horizontal_scroll_direction: HorizontalScrollDirection,
    /// Cross-axis placement while shifting vertically.
    pub horizontal_alignment: HorizontalPosition,
    /// Cross-axis placement while shifting horizontally.
    pub vertical_alignment: VerticalPosition,
}

impl ParallaxOptions {
    /// Travel direction along the active axis.
    pub fn scroll_direction(&self) -> ScrollDirection {
        match self.direction {
            Direction::Vertical => self.vertical_scroll_direction.scroll_direction(),
            Direction::Horizontal => self.horizontal_scroll_direction.scroll_direction(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayOptions {
    pub image: OverlayImage,
    pub opacity: OverlayOpacity,
}

/// Canonical, validated background configuration for one page render.
///
/// Only [`crate::ConfigResolver`] (and strict payload decoding) can build one; there is no way to
/// mutate it afterwards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BackgroundConfig {
    background_color: Option<HexColor>,
    image: Option<ImageMeta>,
    static_options: StaticOptions,
    parallax: ParallaxOptions,
    overlay: OverlayOptions,
}

impl BackgroundConfig {
    pub(crate) fn new(
        background_color: Option<HexColor>,
        image: Option<ImageMeta>,
        static_options: StaticOptions,
        parallax: ParallaxOptions,
        overlay: OverlayOptions,
    ) -> Self {
        Self {
            background_color,
            image,
            static_options,
            parallax,
            overlay,
        }
    }

    pub fn background_color(&self) -> Option<&HexColor> {
        self.background_color.as_ref()
    }

    pub fn image(&self) -> Option<&ImageMeta> {
        self.image.as_ref()
    }

    pub fn static_options(&self) -> &StaticOptions {
        &self.static_options
    }

    pub fn parallax(&self) -> &ParallaxOptions {
        &self.parallax
    }

    pub fn overlay(&self) -> &OverlayOptions {
        &self.overlay
    }

    /// `true` when the page should run the parallax loop.
    pub fn is_parallax(&self) -> bool {
        self.parallax.enabled && self.image.is_some()
    }

    /// Size of the assigned image, zero when there is none.
    pub fn image_size(&self) -> Size {
        self.image.as_ref().map(ImageMeta::size).unwrap_or(Size::ZERO)
    }
}
