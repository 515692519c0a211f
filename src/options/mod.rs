//! Canonical option values and the resolved background configuration.

pub(crate) mod color;
pub(crate) mod config;
pub(crate) mod field;
pub(crate) mod tokens;
