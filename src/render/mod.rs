pub(crate) mod coordinator;
pub(crate) mod host;
pub(crate) mod scheduler;
