pub(crate) mod common;
pub(crate) mod t;
