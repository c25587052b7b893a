//! Static, immutable lookup tables.
//!
//! Tables are plain `static` data: loaded with the binary, never mutated,
//! and therefore shared across threads without synchronisation.

pub(crate) mod companies;
pub(crate) mod names;
pub(crate) mod phones;
pub(crate) mod places;
pub(crate) mod words;
