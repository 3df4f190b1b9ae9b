//! Version normalization and comparison.
//!
//! # Example
//!
//! ```
//! use vercheck::version::{compare, normalize_for_compare, Verdict};
//!
//! let remote = normalize_for_compare("Version 1.2.3.0 (Patch 1)", true);
//! assert_eq!(remote.segments(), &[1, 2, 3, 0]);
//!
//! assert_eq!(compare(Some("1.0"), "1.1"), Verdict::UpdateAvailable);
//! ```

pub mod compare;
pub mod normalize;

pub use compare::{compare, Verdict};
pub use normalize::{
    clean_version, normalize_for_compare, normalize_for_display, version_tuple,
    NormalizedVersion,
};
