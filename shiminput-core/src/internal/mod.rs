pub(crate) mod suppress;
pub(crate) mod transition;
pub(crate) mod translate;
