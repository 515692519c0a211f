use crate::foundation::error::{BackdropError, BackdropResult};
use crate::locale::table::LocaleTable;
use crate::options::field::Field;
use std::collections::BTreeMap;

/// Result of normalizing a stored option value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Canonical {
    Recognized(&'static str),
    Unrecognized,
}

impl Canonical {
    pub fn token(self) -> Option<&'static str> {
        match self {
            Canonical::Recognized(t) => Some(t),
            Canonical::Unrecognized => None,
        }
    }
}

/// Maps between locale display strings and canonical tokens.
///
/// Stored options may have been written under any registered locale, so [`Self::to_canonical`]
/// consults every table: canonical tokens first, then the active locale, then the remaining
/// locales in name order. Tables are checked for cross-locale agreement when registered, which
/// keeps the lookup order from ever changing a result.
#[derive(Debug, Clone)]
pub struct LocaleNormalizer {
    active: String,
    tables: BTreeMap<String, LocaleTable>,
}

impl LocaleNormalizer {
    /// Normalizer that only understands canonical tokens.
    pub fn canonical_only(active: impl Into<String>) -> Self {
        Self {
            active: active.into(),
            tables: BTreeMap::new(),
        }
    }

    /// Normalizer over the built-in tables.
    pub fn builtin(active: impl Into<String>) -> BackdropResult<Self> {
        let mut out = Self::canonical_only(active);
        for table in LocaleTable::builtin()? {
            out = out.with_table(table)?;
        }
        Ok(out)
    }

    /// Register (or replace) the table for `table.locale()`.
    ///
    /// Fails when a display string of the new table names a different token than the same string
    /// does in an already registered locale.
    pub fn with_table(mut self, table: LocaleTable) -> BackdropResult<Self> {
        let mut conflicts = Vec::<String>::new();
        for (name, existing) in &self.tables {
            if name == table.locale() {
                continue;
            }
            for (field, token, shown) in table.entries() {
                if let Some(other) = existing.lookup(field, shown).filter(|o| *o != token) {
                    conflicts.push(format!(
                        "{field}: \"{shown}\" is \"{token}\" in \"{}\" but \"{other}\" in \"{name}\"",
                        table.locale()
                    ));
                }
            }
        }
        if !conflicts.is_empty() {
            return Err(BackdropError::locale(conflicts.join("; ")));
        }

        self.tables.insert(table.locale().to_owned(), table);
        Ok(self)
    }

    pub fn with_active_locale(mut self, active: impl Into<String>) -> Self {
        self.active = active.into();
        self
    }

    pub fn active_locale(&self) -> &str {
        &self.active
    }

    /// Registered locale names in order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Normalize a stored value. Total: unknown input yields [`Canonical::Unrecognized`].
    pub fn to_canonical(&self, value: &str, field: Field) -> Canonical {
        let value = value.trim();
        if let Some(token) = field.canonical(value) {
            return Canonical::Recognized(token);
        }

        if let Some(token) = self
            .tables
            .get(&self.active)
            .and_then(|t| t.lookup(field, value))
        {
            return Canonical::Recognized(token);
        }

        self.tables
            .iter()
            .filter(|(name, _)| **name != self.active)
            .find_map(|(_, t)| t.lookup(field, value))
            .map_or(Canonical::Unrecognized, Canonical::Recognized)
    }

    /// Display string of `token` in `locale`.
    ///
    /// Unregistered locales and tokens the field does not know are returned unchanged.
    pub fn to_display(&self, token: &str, field: Field, locale: &str) -> String {
        let Some(token) = field.canonical(token) else {
            return token.to_owned();
        };
        match self.tables.get(locale) {
            Some(table) => table.display(field, token).to_owned(),
            None => token.to_owned(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/locale/normalizer.rs"]
mod tests;
