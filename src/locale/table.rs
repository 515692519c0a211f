use crate::foundation::error::{BackdropError, BackdropResult};
use crate::options::field::Field;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const BUILTIN_EN: &str = include_str!("../../locales/en.json");
const BUILTIN_DE: &str = include_str!("../../locales/de.json");

/// JSON shape of a locale table: `{ "locale": "de", "fields": { field: { token: display } } }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocaleTableDef {
    pub locale: String,
    #[serde(default)]
    pub fields: BTreeMap<String, BTreeMap<String, String>>,
}

/// Validated display strings of one locale.
///
/// Per field the mapping canonical token -> display string is a bijection. Tokens the table does
/// not list display as themselves.
#[derive(Debug, Clone)]
pub struct LocaleTable {
    locale: String,
    display: BTreeMap<(Field, &'static str), String>,
    reverse: HashMap<Field, HashMap<String, &'static str>>,
}

impl LocaleTable {
    /// Validate and compile a table definition.
    pub fn from_def(def: LocaleTableDef) -> BackdropResult<Self> {
        let locale = def.locale.trim().to_owned();
        let mut errors = Vec::<String>::new();
        if locale.is_empty() {
            errors.push("locale name must be non-empty".to_owned());
        }

        let mut display = BTreeMap::<(Field, &'static str), String>::new();
        for (key, entries) in &def.fields {
            let Some(field) = Field::from_key(key) else {
                errors.push(format!("unknown field \"{key}\""));
                continue;
            };
            for (token, shown) in entries {
                let Some(token) = field.canonical(token) else {
                    errors.push(format!("{field}: unknown canonical token \"{token}\""));
                    continue;
                };
                let shown = shown.trim();
                if shown.is_empty() {
                    errors.push(format!("{field}.{token}: display string must be non-empty"));
                    continue;
                }
                if let Some(other) = field.canonical(shown).filter(|other| *other != token) {
                    errors.push(format!(
                        "{field}.{token}: display string \"{shown}\" is the canonical token of \"{other}\""
                    ));
                    continue;
                }
                display.insert((field, token), shown.to_owned());
            }
        }

        for field in Field::ALL {
            for &token in field.tokens() {
                display
                    .entry((field, token))
                    .or_insert_with(|| token.to_owned());
            }
        }

        let mut reverse = HashMap::<Field, HashMap<String, &'static str>>::new();
        for (&(field, token), shown) in &display {
            let per_field = reverse.entry(field).or_default();
            if let Some(prev) = per_field.insert(shown.clone(), token) {
                errors.push(format!(
                    "{field}: display string \"{shown}\" is shared by \"{prev}\" and \"{token}\""
                ));
            }
        }

        if !errors.is_empty() {
            let label = if locale.is_empty() { "?" } else { locale.as_str() };
            return Err(BackdropError::locale(format!(
                "locale \"{label}\": {}",
                errors.join("; ")
            )));
        }

        Ok(Self {
            locale,
            display,
            reverse,
        })
    }

    pub fn from_json_str(s: &str) -> BackdropResult<Self> {
        let def: LocaleTableDef = serde_json::from_str(s)
            .map_err(|e| BackdropError::serde(format!("parse locale table JSON: {e}")))?;
        Self::from_def(def)
    }

    pub fn from_reader<R: std::io::Read>(r: R) -> BackdropResult<Self> {
        let def: LocaleTableDef = serde_json::from_reader(r)
            .map_err(|e| BackdropError::serde(format!("parse locale table JSON: {e}")))?;
        Self::from_def(def)
    }

    pub fn from_path(path: impl AsRef<Path>) -> BackdropResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BackdropError::locale(format!("open locale table '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Tables shipped with the crate (`en`, `de`).
    pub fn builtin() -> BackdropResult<Vec<Self>> {
        Ok(vec![
            Self::from_json_str(BUILTIN_EN)?,
            Self::from_json_str(BUILTIN_DE)?,
        ])
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Display string of a canonical token.
    pub fn display(&self, field: Field, token: &'static str) -> &str {
        self.display
            .get(&(field, token))
            .map(String::as_str)
            .unwrap_or(token)
    }

    /// Canonical token displayed as `shown` in this locale.
    pub fn lookup(&self, field: Field, shown: &str) -> Option<&'static str> {
        self.reverse.get(&field)?.get(shown).copied()
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (Field, &'static str, &str)> + '_ {
        self.display
            .iter()
            .map(|(&(field, token), shown)| (field, token, shown.as_str()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/locale/table.rs"]
mod tests;
