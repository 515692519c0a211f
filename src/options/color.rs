use serde::{Deserialize, Serialize};
use std::fmt;

/// Background color as 3 or 6 lowercase hex digits, stored without the leading `#`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Sanitize a raw color value.
    ///
    /// Every non-hex character is dropped first (so `"#FFaa00"` and `"ff aa 00"` both yield
    /// `ffaa00`); the remainder must be exactly 3 or 6 digits.
    pub fn sanitize(raw: &str) -> Option<Self> {
        let digits: String = raw
            .chars()
            .filter(char::is_ascii_hexdigit)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match digits.len() {
            3 | 6 => Some(Self(digits)),
            _ => None,
        }
    }

    /// Hex digits without `#`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// CSS color literal (`#rrggbb` or `#rgb`).
    pub fn css(&self) -> String {
        format!("#{}", self.0)
    }

    /// Expand to straight RGB8.
    pub fn to_rgb8(&self) -> [u8; 3] {
        fn nibble(c: u8) -> u8 {
            (c as char).to_digit(16).unwrap_or(0) as u8
        }

        match *self.0.as_bytes() {
            [r, g, b] => [nibble(r) * 17, nibble(g) * 17, nibble(b) * 17],
            [r1, r2, g1, g2, b1, b2] => [
                (nibble(r1) << 4) | nibble(r2),
                (nibble(g1) << 4) | nibble(g2),
                (nibble(b1) << 4) | nibble(b2),
            ],
            _ => [0, 0, 0],
        }
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::sanitize(&raw)
            .filter(|c| c.0 == raw)
            .ok_or_else(|| format!("invalid hex color {raw:?}: expected 3 or 6 lowercase digits"))
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/options/color.rs"]
mod tests;
