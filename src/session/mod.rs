pub(crate) mod floating_cursor;
pub(crate) mod host;
