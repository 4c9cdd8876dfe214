pub(crate) mod attrs;
pub(crate) mod tree;
