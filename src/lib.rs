//! # alphanum
//!
//! `alphanum` sorts strings, and values with string keys, in natural order: embedded digit
//! runs compare as numbers, so `"img2"` sorts before `"img10"`.
//!
//! ## Key Features
//!
//! - **Numeric chunks**: Keys are split into digit and text runs. Digit runs compare by
//!   magnitude (any length, no overflow), with zero-padding as a deterministic tie-break.
//! - **Sign awareness**: With [`SortOptions::sign`], a `+`/`-` directly before a digit run
//!   makes it a signed number, and negative zero sorts just below zero.
//! - **Keyed values**: The [`Keyed`] trait turns any element into a key, either the whole
//!   value or a named field, with a secondary field for ties.
//! - **Stable**: Elements with equal keys keep their input order; `reverse` reverses the
//!   stable result, ties included.
//! - **JSON**: [`sort_json`] sorts mixed arrays of numbers, strings and objects.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use alphanum::{natural_sort_mut, SortOptions};
//!
//! let mut data = vec!["img12.png", "img10.png", "img2.png", "img1.png"];
//! natural_sort_mut(&mut data, &SortOptions::default());
//!
//! assert_eq!(data, vec!["img1.png", "img2.png", "img10.png", "img12.png"]);
//! ```
//!
//! ### Custom Types
//!
//! Implement [`Keyed`] to sort your own types by whole value or by field.
//!
//! ```rust
//! use std::borrow::Cow;
//! use alphanum::{natural_sort, Keyed, SortOptions};
//!
//! #[derive(Debug, PartialEq)]
//! struct Release {
//!     channel: &'static str,
//!     version: &'static str,
//! }
//!
//! impl Keyed for Release {
//!     fn key(&self) -> Cow<'_, str> {
//!         Cow::Borrowed(self.version)
//!     }
//!
//!     fn field(&self, name: &str) -> Option<Cow<'_, str>> {
//!         match name {
//!             "channel" => Some(Cow::Borrowed(self.channel)),
//!             "version" => Some(Cow::Borrowed(self.version)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let releases = vec![
//!     Release { channel: "stable", version: "1.10.0" },
//!     Release { channel: "beta", version: "1.9.2" },
//!     Release { channel: "stable", version: "1.9.0" },
//! ];
//!
//! let options = SortOptions::new()
//!     .with_sort_by("channel")
//!     .with_sort_by_secondary("version");
//! let sorted = natural_sort(releases, &options);
//!
//! assert_eq!(sorted[0].version, "1.9.2");
//! assert_eq!(sorted[1].version, "1.9.0");
//! assert_eq!(sorted[2].version, "1.10.0");
//! ```
//!
//! ## Performance Characteristics
//!
//! - Each key is extracted and tokenized once per sort, not once per comparison.
//! - **Time**: O(N log N) comparisons, each linear in the shorter key.
//! - **Memory Overhead**: One decorated record and up to two chunk vectors per element.

pub mod algo;
pub mod core;
pub mod error;
pub mod json;
pub mod options;

pub use algo::{
    NaturalComparator, compare, natural_sort, natural_sort_by_key, natural_sort_indices,
    natural_sort_mut,
};
pub use crate::core::{Accessor, KeyAccessor, Keyed};
pub use error::{Error, Result};
pub use json::sort_json;
pub use options::SortOptions;

pub mod prelude {
    pub use crate::algo::{
        NaturalComparator, compare, natural_sort, natural_sort_by_key, natural_sort_indices,
        natural_sort_mut,
    };
    pub use crate::core::{Accessor, KeyAccessor, Keyed};
    pub use crate::options::SortOptions;
}
