//! Locale display strings and their canonical tokens.

pub(crate) mod normalizer;
pub(crate) mod table;
