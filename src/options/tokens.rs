use std::fmt;

/// An enumerated option value with a fixed set of canonical (locale-independent) tokens.
pub trait Token: Copy + Eq + fmt::Debug + 'static {
    /// Every value, in declaration order.
    const ALL: &'static [Self];
    /// Canonical token strings, index-aligned with [`Token::ALL`].
    const TOKENS: &'static [&'static str];

    /// Canonical token for this value.
    fn as_str(self) -> &'static str;

    /// Parse an exact canonical token. Display strings are not accepted here.
    fn from_canonical(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == token)
    }
}

macro_rules! canonical_tokens {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize,
            serde::Deserialize,
        )]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $token)] $variant ),+
        }

        impl Token for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];
            const TOKENS: &'static [&'static str] = &[$($token),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

canonical_tokens! {
    /// `background-repeat` for the static background.
    pub enum Repeat {
        NoRepeat => "no-repeat",
        Repeat => "repeat",
        RepeatX => "repeat-x",
        RepeatY => "repeat-y",
    }
}

canonical_tokens! {
    /// Horizontal edge or center, shared by `position_x` and `horizontal_alignment`.
    pub enum HorizontalPosition {
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

canonical_tokens! {
    /// Vertical edge or center, shared by `position_y` and `vertical_alignment`.
    pub enum VerticalPosition {
        Top => "top",
        Center => "center",
        Bottom => "bottom",
    }
}

canonical_tokens! {
    /// `background-attachment` for the static background.
    pub enum Attachment {
        Fixed => "fixed",
        Scroll => "scroll",
    }
}

canonical_tokens! {
    /// Axis the parallax image travels along.
    pub enum Direction {
        Vertical => "vertical",
        Horizontal => "horizontal",
    }
}

canonical_tokens! {
    /// Travel direction of a vertically shifting image.
    pub enum VerticalScrollDirection {
        ToTop => "top",
        ToBottom => "bottom",
    }
}

canonical_tokens! {
    /// Travel direction of a horizontally shifting image.
    pub enum HorizontalScrollDirection {
        ToLeft => "left",
        ToRight => "right",
    }
}

canonical_tokens! {
    /// Pattern image composited above the background image.
    pub enum OverlayImage {
        None => "none",
        Pattern01 => "01",
        Pattern02 => "02",
        Pattern03 => "03",
        Pattern04 => "04",
        Pattern05 => "05",
        Pattern06 => "06",
        Pattern07 => "07",
        Pattern08 => "08",
        Pattern09 => "09",
    }
}

canonical_tokens! {
    /// Overlay opacity in tenths.
    pub enum OverlayOpacity {
        Tenth1 => "0.1",
        Tenth2 => "0.2",
        Tenth3 => "0.3",
        Tenth4 => "0.4",
        Tenth5 => "0.5",
        Tenth6 => "0.6",
        Tenth7 => "0.7",
        Tenth8 => "0.8",
        Tenth9 => "0.9",
    }
}

/// Axis-independent travel direction: toward the top/left edge or toward the bottom/right edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Toward the top (vertical) or left (horizontal) edge.
    ToStart,
    /// Toward the bottom (vertical) or right (horizontal) edge.
    ToEnd,
}

impl VerticalScrollDirection {
    /// Axis-independent form of this direction.
    pub fn scroll_direction(self) -> ScrollDirection {
        match self {
            Self::ToTop => ScrollDirection::ToStart,
            Self::ToBottom => ScrollDirection::ToEnd,
        }
    }
}

impl HorizontalScrollDirection {
    /// Axis-independent form of this direction.
    pub fn scroll_direction(self) -> ScrollDirection {
        match self {
            Self::ToLeft => ScrollDirection::ToStart,
            Self::ToRight => ScrollDirection::ToEnd,
        }
    }
}

impl OverlayImage {
    /// File name of the pattern image, `None` for [`OverlayImage::None`].
    pub fn file_name(self) -> Option<String> {
        match self {
            Self::None => None,
            other => Some(format!("{}.png", other.as_str())),
        }
    }

    /// Parse either the canonical token (`"04"`) or the file name (`"04.png"`).
    pub fn from_file_name(name: &str) -> Option<Self> {
        let stem = name.strip_suffix(".png").unwrap_or(name);
        Self::from_canonical(stem)
    }
}

impl OverlayOpacity {
    /// Opacity as a fraction in `[0.1, 0.9]`.
    pub fn value(self) -> f64 {
        match self {
            Self::Tenth1 => 0.1,
            Self::Tenth2 => 0.2,
            Self::Tenth3 => 0.3,
            Self::Tenth4 => 0.4,
            Self::Tenth5 => 0.5,
            Self::Tenth6 => 0.6,
            Self::Tenth7 => 0.7,
            Self::Tenth8 => 0.8,
            Self::Tenth9 => 0.9,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/options/tokens.rs"]
mod tests;
