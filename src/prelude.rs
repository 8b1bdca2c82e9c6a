//! Prelude module for the mmcal crate.
//!
//! Re-exports commonly used derive macros from derive_more.

#[allow(unused_imports)]
pub(crate) use derive_more::Display;
