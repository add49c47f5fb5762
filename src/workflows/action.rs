pub(crate) mod ta01_load_basis;
pub(crate) mod ta02_validate_basis;
pub(crate) mod ta03_reduce_basis;
pub(crate) mod ta04_check_basis;
pub(crate) mod ta05_emit_basis;
