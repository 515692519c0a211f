use crate::foundation::error::{BackdropError, BackdropResult};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Raw key of the sanitized background color.
pub const KEY_BACKGROUND_COLOR: &str = "background_color";
/// Raw key of the media-library reference of the background image.
pub const KEY_ATTACHMENT_ID: &str = "attachment_id";
/// Raw key of the stored parallax switch.
pub const KEY_PARALLAX_ENABLED: &str = "parallax_enabled";

/// Loosely typed per-page options exactly as persisted.
///
/// Values may be missing, display strings of any locale, or garbage; nothing here is validated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawOptions {
    values: BTreeMap<String, String>,
}

impl RawOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Attachment reference, `None` when absent or blank.
    pub fn attachment_ref(&self) -> Option<&str> {
        self.get(KEY_ATTACHMENT_ID)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Build from a JSON object.
    ///
    /// Strings are kept verbatim, numbers and booleans are stringified, and `null`, arrays and
    /// nested objects count as absent. A non-object document is an error.
    pub fn from_json_value(v: &Value) -> BackdropResult<Self> {
        let Value::Object(map) = v else {
            return Err(BackdropError::validation(
                "raw options must be a JSON object",
            ));
        };

        let mut out = Self::new();
        for (key, value) in map {
            let s = match value {
                Value::String(s) => s.clone(),
                Value::Bool(b) => (if *b { "1" } else { "" }).to_owned(),
                Value::Number(n) => n.to_string(),
                Value::Null | Value::Array(_) | Value::Object(_) => continue,
            };
            out.insert(key.clone(), s);
        }
        Ok(out)
    }

    pub fn from_reader<R: std::io::Read>(r: R) -> BackdropResult<Self> {
        let v: Value = serde_json::from_reader(r)
            .map_err(|e| BackdropError::serde(format!("parse raw options JSON: {e}")))?;
        Self::from_json_value(&v)
    }

    pub fn from_path(path: impl AsRef<Path>) -> BackdropResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BackdropError::validation(format!("open raw options '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (k, v) in iter {
            out.insert(k, v);
        }
        out
    }
}

/// Interpret a stored switch. `1`, `true`, `on` and `yes` (any case) are on; everything else,
/// including absence, is off.
pub(crate) fn is_truthy(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "on" | "yes"
        )
    })
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/raw.rs"]
mod tests;
