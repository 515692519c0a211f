//! Pure per-frame placement math for the background image container.

pub(crate) mod engine;
pub(crate) mod state;
