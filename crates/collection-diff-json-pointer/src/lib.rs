//! Paths into JSON documents.
//!
//! A [`Path`] is a sequence of [`PathStep`]s, each either an object key or
//! an array index. Paths render as RFC 6901 JSON Pointers and resolve
//! against `serde_json` documents.
//!
//! # Example
//!
//! ```
//! use collection_diff_json_pointer::{format_json_pointer, get_mut, PathStep};
//!
//! let path = vec![PathStep::from("foo"), PathStep::Index(0)];
//! assert_eq!(format_json_pointer(&path), "/foo/0");
//!
//! let mut doc = serde_json::json!({"foo": [42]});
//! assert_eq!(get_mut(&mut doc, &path), Some(&mut serde_json::json!(42)));
//! ```

pub mod types;
pub use types::{Path, PathStep};

mod get;
mod util;

pub use get::get_mut;
pub use util::{escape_component, format_json_pointer};
