use crate::options::tokens::{
    Attachment, Direction, HorizontalPosition, HorizontalScrollDirection, OverlayImage,
    OverlayOpacity, Repeat, Token, VerticalPosition, VerticalScrollDirection,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Enumerated per-page option. The serialized name is the raw storage key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    BackgroundRepeat,
    PositionX,
    PositionY,
    BackgroundAttachment,
    Direction,
    VerticalScrollDirection,
    HorizontalScrollDirection,
    HorizontalAlignment,
    VerticalAlignment,
    OverlayImage,
    OverlayOpacity,
}

impl Field {
    /// Every enumerated field.
    pub const ALL: [Field; 11] = [
        Field::BackgroundRepeat,
        Field::PositionX,
        Field::PositionY,
        Field::BackgroundAttachment,
        Field::Direction,
        Field::VerticalScrollDirection,
        Field::HorizontalScrollDirection,
        Field::HorizontalAlignment,
        Field::VerticalAlignment,
        Field::OverlayImage,
        Field::OverlayOpacity,
    ];

    /// Raw option key this field is stored under.
    pub fn key(self) -> &'static str {
        match self {
            Field::BackgroundRepeat => "background_repeat",
            Field::PositionX => "position_x",
            Field::PositionY => "position_y",
            Field::BackgroundAttachment => "background_attachment",
            Field::Direction => "direction",
            Field::VerticalScrollDirection => "vertical_scroll_direction",
            Field::HorizontalScrollDirection => "horizontal_scroll_direction",
            Field::HorizontalAlignment => "horizontal_alignment",
            Field::VerticalAlignment => "vertical_alignment",
            Field::OverlayImage => "overlay_image",
            Field::OverlayOpacity => "overlay_opacity",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Canonical tokens accepted by this field.
    pub fn tokens(self) -> &'static [&'static str] {
        match self {
            Field::BackgroundRepeat => Repeat::TOKENS,
            Field::PositionX | Field::HorizontalAlignment => HorizontalPosition::TOKENS,
            Field::PositionY | Field::VerticalAlignment => VerticalPosition::TOKENS,
            Field::BackgroundAttachment => Attachment::TOKENS,
            Field::Direction => Direction::TOKENS,
            Field::VerticalScrollDirection => VerticalScrollDirection::TOKENS,
            Field::HorizontalScrollDirection => HorizontalScrollDirection::TOKENS,
            Field::OverlayImage => OverlayImage::TOKENS,
            Field::OverlayOpacity => OverlayOpacity::TOKENS,
        }
    }

    /// Return the `'static` canonical token equal to `token`, if the field has one.
    pub fn canonical(self, token: &str) -> Option<&'static str> {
        self.tokens().iter().copied().find(|t| *t == token)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/options/field.rs"]
mod tests;
