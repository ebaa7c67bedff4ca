pub(crate) mod controller;
pub(crate) mod notice;
pub(crate) mod scheduler;
pub(crate) mod state;
