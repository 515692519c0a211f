use crate::foundation::error::{BackdropError, BackdropResult};
use crate::options::field::Field;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const BUILTIN_DEFAULTS: [(Field, &str); 11] = [
    (Field::BackgroundRepeat, "no-repeat"),
    (Field::PositionX, "left"),
    (Field::PositionY, "top"),
    (Field::BackgroundAttachment, "fixed"),
    (Field::Direction, "vertical"),
    (Field::VerticalScrollDirection, "top"),
    (Field::HorizontalScrollDirection, "left"),
    (Field::HorizontalAlignment, "center"),
    (Field::VerticalAlignment, "center"),
    (Field::OverlayImage, "none"),
    (Field::OverlayOpacity, "0.3"),
];

/// JSON overrides for [`OptionTables`]; fields not mentioned keep the built-in entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionTablesDef {
    #[serde(default)]
    pub allowed: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub defaults: BTreeMap<String, String>,
}

/// Allowed-value whitelist and default of every enumerated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionTables {
    allowed: BTreeMap<Field, Vec<&'static str>>,
    defaults: BTreeMap<Field, &'static str>,
}

impl Default for OptionTables {
    fn default() -> Self {
        Self::builtin()
    }
}

impl OptionTables {
    /// Every canonical token allowed, documented defaults.
    pub fn builtin() -> Self {
        let allowed = Field::ALL
            .into_iter()
            .map(|f| (f, f.tokens().to_vec()))
            .collect();
        let defaults = BUILTIN_DEFAULTS
            .into_iter()
            .filter_map(|(f, token)| f.canonical(token).map(|t| (f, t)))
            .collect();
        Self { allowed, defaults }
    }

    /// Apply overrides on top of [`Self::builtin`] and validate the result.
    ///
    /// A malformed table is a deployment defect, so every problem is reported at once instead
    /// of falling back.
    pub fn from_def(def: &OptionTablesDef) -> BackdropResult<Self> {
        let mut out = Self::builtin();
        let mut errors = Vec::<String>::new();

        for (key, tokens) in &def.allowed {
            let Some(field) = Field::from_key(key) else {
                errors.push(format!("allowed: unknown field \"{key}\""));
                continue;
            };
            let mut list = Vec::<&'static str>::with_capacity(tokens.len());
            for token in tokens {
                match field.canonical(token.trim()) {
                    Some(t) if !list.contains(&t) => list.push(t),
                    Some(_) => {}
                    None => errors.push(format!("allowed.{field}: unknown token \"{token}\"")),
                }
            }
            out.allowed.insert(field, list);
        }

        for (key, token) in &def.defaults {
            let Some(field) = Field::from_key(key) else {
                errors.push(format!("defaults: unknown field \"{key}\""));
                continue;
            };
            match field.canonical(token.trim()) {
                Some(t) => {
                    out.defaults.insert(field, t);
                }
                None => errors.push(format!("defaults.{field}: unknown token \"{token}\"")),
            }
        }

        if let Err(e) = out.validate() {
            errors.push(e.to_string());
        }
        if !errors.is_empty() {
            return Err(BackdropError::validation(format!(
                "option tables: {}",
                errors.join("; ")
            )));
        }
        Ok(out)
    }

    pub fn from_reader<R: std::io::Read>(r: R) -> BackdropResult<Self> {
        let def: OptionTablesDef = serde_json::from_reader(r)
            .map_err(|e| BackdropError::serde(format!("parse option tables JSON: {e}")))?;
        Self::from_def(&def)
    }

    pub fn from_path(path: impl AsRef<Path>) -> BackdropResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BackdropError::validation(format!("open option tables '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check that every field has a non-empty whitelist containing its default.
    pub fn validate(&self) -> BackdropResult<()> {
        let mut errors = Vec::<String>::new();
        for field in Field::ALL {
            let allowed = self.allowed(field);
            if allowed.is_empty() {
                errors.push(format!("{field}: allowed values must be non-empty"));
                continue;
            }
            match self.defaults.get(&field) {
                Some(d) if allowed.contains(d) => {}
                Some(d) => errors.push(format!("{field}: default \"{d}\" is not allowed")),
                None => errors.push(format!("{field}: missing default")),
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(BackdropError::validation(errors.join("; ")))
        }
    }

    pub fn allowed(&self, field: Field) -> &[&'static str] {
        self.allowed.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_allowed(&self, field: Field, token: &str) -> bool {
        self.allowed(field).contains(&token)
    }

    /// Default token of `field`.
    pub fn default_token(&self, field: Field) -> &'static str {
        self.defaults
            .get(&field)
            .copied()
            .unwrap_or_else(|| field.tokens()[0])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/tables.rs"]
mod tests;
