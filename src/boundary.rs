//! Wire contract between page preparation and the client-side render loop.
//!
//! Every key is always present. Decoding back into a [`BackgroundConfig`] is strict: the payload
//! is machine-produced, so an unknown token is an error instead of a silent default.

use crate::foundation::error::{BackdropError, BackdropResult};
use crate::gate::is_parallax_eligible;
use crate::options::color::HexColor;
use crate::options::config::{
    BackgroundConfig, ImageMeta, OverlayOptions, ParallaxOptions, StaticOptions,
};
use crate::options::tokens::{
    HorizontalScrollDirection, OverlayImage, Token, VerticalScrollDirection,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientPayload {
    /// Hex digits without `#`, or empty.
    pub background_color: String,
    /// Image URL, or empty when no image is assigned.
    pub image_src: String,
    pub image_width: u32,
    pub image_height: u32,
    pub background_repeat: String,
    pub position_x: String,
    pub position_y: String,
    pub background_attachment: String,
    pub parallax_enabled: bool,
    pub direction: String,
    /// `toTop` or `toBottom`.
    pub vertical_scroll_direction: String,
    /// `toLeft` or `toRight`.
    pub horizontal_scroll_direction: String,
    pub horizontal_alignment: String,
    pub vertical_alignment: String,
    /// `none` or a pattern file name such as `04.png`.
    pub overlay_image: String,
    pub overlay_opacity: String,
    /// URL prefix for overlay pattern files.
    pub overlay_path: String,
}

impl ClientPayload {
    pub fn from_config(config: &BackgroundConfig, overlay_path: &str) -> Self {
        let s = config.static_options();
        let p = config.parallax();
        let o = config.overlay();
        let (image_src, image_width, image_height) = match config.image() {
            Some(img) => (img.url.clone(), img.width, img.height),
            None => (String::new(), 0, 0),
        };

        Self {
            background_color: config
                .background_color()
                .map(|c| c.as_str().to_owned())
                .unwrap_or_default(),
            image_src,
            image_width,
            image_height,
            background_repeat: s.repeat.as_str().to_owned(),
            position_x: s.position_x.as_str().to_owned(),
            position_y: s.position_y.as_str().to_owned(),
            background_attachment: s.attachment.as_str().to_owned(),
            parallax_enabled: p.enabled,
            direction: p.direction.as_str().to_owned(),
            vertical_scroll_direction: vertical_wire(p.vertical_scroll_direction).to_owned(),
            horizontal_scroll_direction: horizontal_wire(p.horizontal_scroll_direction).to_owned(),
            horizontal_alignment: p.horizontal_alignment.as_str().to_owned(),
            vertical_alignment: p.vertical_alignment.as_str().to_owned(),
            overlay_image: o
                .image
                .file_name()
                .unwrap_or_else(|| OverlayImage::None.as_str().to_owned()),
            overlay_opacity: o.opacity.as_str().to_owned(),
            overlay_path: overlay_path.to_owned(),
        }
    }

    pub fn to_json(&self) -> BackdropResult<String> {
        serde_json::to_string(self).map_err(|e| BackdropError::serde(e.to_string()))
    }

    pub fn from_json_str(s: &str) -> BackdropResult<Self> {
        serde_json::from_str(s).map_err(|e| BackdropError::serde(e.to_string()))
    }
}

impl TryFrom<ClientPayload> for BackgroundConfig {
    type Error = BackdropError;

    fn try_from(payload: ClientPayload) -> BackdropResult<Self> {
        let background_color = if payload.background_color.is_empty() {
            None
        } else {
            let color = HexColor::sanitize(&payload.background_color)
                .filter(|c| c.as_str() == payload.background_color)
                .ok_or_else(|| invalid("backgroundColor", &payload.background_color))?;
            Some(color)
        };

        let image = if payload.image_src.is_empty() {
            None
        } else {
            Some(ImageMeta {
                attachment_ref: String::new(),
                url: payload.image_src.clone(),
                width: payload.image_width,
                height: payload.image_height,
            })
        };

        let static_options = StaticOptions {
            repeat: token("backgroundRepeat", &payload.background_repeat)?,
            position_x: token("positionX", &payload.position_x)?,
            position_y: token("positionY", &payload.position_y)?,
            attachment: token("backgroundAttachment", &payload.background_attachment)?,
        };

        let vertical_scroll_direction = match payload.vertical_scroll_direction.as_str() {
            "toTop" => VerticalScrollDirection::ToTop,
            "toBottom" => VerticalScrollDirection::ToBottom,
            other => return Err(invalid("verticalScrollDirection", other)),
        };
        let horizontal_scroll_direction = match payload.horizontal_scroll_direction.as_str() {
            "toLeft" => HorizontalScrollDirection::ToLeft,
            "toRight" => HorizontalScrollDirection::ToRight,
            other => return Err(invalid("horizontalScrollDirection", other)),
        };

        let eligible = is_parallax_eligible(image.as_ref());
        if payload.parallax_enabled && !eligible {
            tracing::debug!(
                width = payload.image_width,
                height = payload.image_height,
                "payload requests parallax for an ineligible image"
            );
        }
        let parallax = ParallaxOptions {
            enabled: payload.parallax_enabled && eligible,
            direction: token("direction", &payload.direction)?,
            vertical_scroll_direction,
            horizontal_scroll_direction,
            horizontal_alignment: token("horizontalAlignment", &payload.horizontal_alignment)?,
            vertical_alignment: token("verticalAlignment", &payload.vertical_alignment)?,
        };

        let overlay = OverlayOptions {
            image: OverlayImage::from_file_name(&payload.overlay_image)
                .ok_or_else(|| invalid("overlayImage", &payload.overlay_image))?,
            opacity: token("overlayOpacity", &payload.overlay_opacity)?,
        };

        Ok(BackgroundConfig::new(
            background_color,
            image,
            static_options,
            parallax,
            overlay,
        ))
    }
}

fn vertical_wire(d: VerticalScrollDirection) -> &'static str {
    match d {
        VerticalScrollDirection::ToTop => "toTop",
        VerticalScrollDirection::ToBottom => "toBottom",
    }
}

fn horizontal_wire(d: HorizontalScrollDirection) -> &'static str {
    match d {
        HorizontalScrollDirection::ToLeft => "toLeft",
        HorizontalScrollDirection::ToRight => "toRight",
    }
}

fn token<T: Token>(key: &str, value: &str) -> BackdropResult<T> {
    T::from_canonical(value).ok_or_else(|| invalid(key, value))
}

fn invalid(key: &str, value: &str) -> BackdropError {
    BackdropError::validation(format!("payload field `{key}`: unexpected value {value:?}"))
}

#[cfg(test)]
#[path = "../tests/unit/boundary/payload.rs"]
mod tests;
