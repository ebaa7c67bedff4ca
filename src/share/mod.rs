pub(crate) mod adapters;
pub(crate) mod chain;
pub(crate) mod payload;
