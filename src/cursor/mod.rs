pub(crate) mod config;
pub(crate) mod events;
pub(crate) mod label;
pub(crate) mod resolver;
pub(crate) mod smoother;
pub(crate) mod tracker;
