use crate::foundation::core::{Size, finite_or_zero};
use crate::geometry::state::{ScrollState, StaticStyle, TransformVector};
use crate::options::config::{BackgroundConfig, ParallaxOptions, StaticOptions};
use crate::options::tokens::{
    Direction, HorizontalPosition, ScrollDirection, Token, VerticalPosition,
};

/// Compute the container placement for the current frame.
///
/// Static configs only get edge/center anchors. Parallax configs get a scroll-proportional
/// offset along the configured axis plus main- and cross-axis anchors. Every returned component
/// is finite.
pub fn compute_transform(
    config: &BackgroundConfig,
    image: Size,
    state: &ScrollState,
) -> TransformVector {
    if config.parallax().enabled {
        parallax_transform(config.parallax(), image, state)
    } else {
        static_transform(config.static_options(), image, state.viewport())
    }
}

/// Image travel per pixel of page scroll.
///
/// `(image - viewport) / (document - viewport)` along one axis, so the image's far edge reaches
/// the viewport edge exactly when the page is fully scrolled. An image smaller than the viewport
/// gets a negative ratio and travels against the scroll. A page that cannot scroll yields `0`.
pub fn scroll_ratio(image_extent: f64, viewport_extent: f64, document_extent: f64) -> f64 {
    let document_overflow = document_extent - viewport_extent;
    if document_overflow.is_nan() || document_overflow <= 0.0 {
        return 0.0;
    }
    let image_overflow = image_extent - viewport_extent;
    finite_or_zero(image_overflow / document_overflow)
}

/// CSS keywords to apply as plain style properties in static mode.
pub fn static_style(config: &BackgroundConfig) -> StaticStyle {
    let s = config.static_options();
    StaticStyle {
        background_repeat: s.repeat.as_str(),
        background_position_x: s.position_x.as_str(),
        background_position_y: s.position_y.as_str(),
        background_attachment: s.attachment.as_str(),
    }
}

fn static_transform(s: &StaticOptions, image: Size, viewport: Size) -> TransformVector {
    let mut t = TransformVector::default();
    match s.position_x {
        HorizontalPosition::Left => t.left = Some(0.0),
        HorizontalPosition::Center => t.left = Some(centered(viewport.width, image.width)),
        HorizontalPosition::Right => t.right = Some(0.0),
    }
    match s.position_y {
        VerticalPosition::Top => t.top = Some(0.0),
        VerticalPosition::Center => t.top = Some(centered(viewport.height, image.height)),
        VerticalPosition::Bottom => t.bottom = Some(0.0),
    }
    t
}

fn parallax_transform(p: &ParallaxOptions, image: Size, state: &ScrollState) -> TransformVector {
    let viewport = state.viewport();
    let document = state.document();
    let scroll = state.scroll();
    let towards = p.scroll_direction();
    let mut t = TransformVector::default();

    match p.direction {
        Direction::Vertical => {
            let ratio = scroll_ratio(image.height, viewport.height, document.height);
            t.dy = signed_travel(scroll.y * ratio, towards);
            t.left = Some(horizontal_anchor(p.horizontal_alignment, viewport.width, image.width));
            match towards {
                ScrollDirection::ToStart => t.top = Some(0.0),
                ScrollDirection::ToEnd => t.bottom = Some(0.0),
            }
        }
        Direction::Horizontal => {
            let ratio = scroll_ratio(image.width, viewport.width, document.width);
            t.dx = signed_travel(scroll.x * ratio, towards);
            t.top = Some(vertical_anchor(p.vertical_alignment, viewport.height, image.height));
            match towards {
                ScrollDirection::ToStart => t.left = Some(0.0),
                ScrollDirection::ToEnd => t.right = Some(0.0),
            }
        }
    }
    t
}

fn signed_travel(travel: f64, towards: ScrollDirection) -> f64 {
    let travel = match towards {
        ScrollDirection::ToStart => -finite_or_zero(travel),
        ScrollDirection::ToEnd => finite_or_zero(travel),
    };
    // No "-0" in serialized transforms.
    if travel == 0.0 { 0.0 } else { travel }
}

fn centered(viewport_extent: f64, image_extent: f64) -> f64 {
    finite_or_zero((viewport_extent - image_extent) / 2.0)
}

fn horizontal_anchor(align: HorizontalPosition, viewport_width: f64, image_width: f64) -> f64 {
    match align {
        HorizontalPosition::Left => 0.0,
        HorizontalPosition::Center => centered(viewport_width, image_width),
        HorizontalPosition::Right => finite_or_zero(viewport_width - image_width),
    }
}

fn vertical_anchor(align: VerticalPosition, viewport_height: f64, image_height: f64) -> f64 {
    match align {
        VerticalPosition::Top => 0.0,
        VerticalPosition::Center => centered(viewport_height, image_height),
        VerticalPosition::Bottom => finite_or_zero(viewport_height - image_height),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/engine.rs"]
mod tests;
