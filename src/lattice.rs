pub(crate) mod basis;
pub(crate) mod gram_schmidt;
pub(crate) mod reduce;
pub(crate) mod vector;

pub(crate) use basis::Basis;
pub(crate) use reduce::{Delta, ReductionReport, ReductionStats, is_reduced, reduce_with};
