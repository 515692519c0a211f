//! Raw option bags, whitelist/default tables and the config resolver.

pub(crate) mod raw;
pub(crate) mod resolver;
pub(crate) mod tables;
