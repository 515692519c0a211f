//! The single parallax eligibility rule.
//!
//! Authoring UI, preview and render path all ask this module; none of them compares image
//! dimensions on its own.

use crate::options::config::ImageMeta;
use serde::Serialize;

/// Minimum image width for scroll-coupled motion.
pub const MIN_PARALLAX_WIDTH: u32 = 1920;
/// Minimum image height for scroll-coupled motion.
pub const MIN_PARALLAX_HEIGHT: u32 = 1200;

/// Why an image does or does not qualify for parallax.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Eligibility {
    NoImage,
    TooSmall { width: u32, height: u32 },
    Eligible,
}

impl Eligibility {
    pub fn is_eligible(self) -> bool {
        matches!(self, Eligibility::Eligible)
    }
}

/// Classify already-fetched image metadata.
pub fn eligibility(image: Option<&ImageMeta>) -> Eligibility {
    match image {
        None => Eligibility::NoImage,
        Some(meta) => eligibility_for_size(meta.width, meta.height),
    }
}

/// Classify raw pixel dimensions (e.g. from a media picker before metadata exists).
pub fn eligibility_for_size(width: u32, height: u32) -> Eligibility {
    if width >= MIN_PARALLAX_WIDTH && height >= MIN_PARALLAX_HEIGHT {
        Eligibility::Eligible
    } else {
        Eligibility::TooSmall { width, height }
    }
}

/// `true` iff an image is present and at least 1920×1200.
pub fn is_parallax_eligible(image: Option<&ImageMeta>) -> bool {
    eligibility(image).is_eligible()
}

#[cfg(test)]
#[path = "../tests/unit/gate/eligibility.rs"]
mod tests;
