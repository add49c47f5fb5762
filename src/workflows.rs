pub(crate) mod action;
