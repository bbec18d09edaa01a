//! Collection type aliases.
//!
//! FxHash variants are used on every hot path; the grouping keys are short
//! strings where SipHash overhead is measurable.

pub use rustc_hash::{FxHashMap, FxHashSet};
