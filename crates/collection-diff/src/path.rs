//! Path converters.
//!
//! A converter turns the internal [`Path`] of a change into whatever the
//! caller wants to store in [`Operation::path`](crate::Operation). It runs
//! once per emitted operation, so it must be a pure function of the path.

use collection_diff_json_pointer::format_json_pointer;

use crate::types::{Path, PathStep};

/// Maps a raw path to its external representation.
///
/// Implemented for every `Fn(&[PathStep]) -> T`, so plain functions such as
/// [`json_patch_path_converter`] and closures can be passed directly.
pub trait PathConverter {
    type Output: Clone;

    fn convert(&self, path: &[PathStep]) -> Self::Output;
}

impl<F, T> PathConverter for F
where
    F: Fn(&[PathStep]) -> T,
    T: Clone,
{
    type Output = T;

    fn convert(&self, path: &[PathStep]) -> T {
        self(path)
    }
}

/// Default converter: keeps the raw step sequence.
pub fn identity_path_converter(path: &[PathStep]) -> Path {
    path.to_vec()
}

/// Renders a path JSON-Patch style: `["b", "c"]` becomes `"/b/c"` and the
/// root becomes `""`.
///
/// Segments are joined verbatim; `~` and `/` inside keys are **not**
/// escaped, so a key such as `"a/b"` yields the ambiguous `"/a/b"`. Use
/// [`json_pointer_path_converter`] for RFC 6901 escaping.
///
/// # Example
///
/// ```
/// use collection_diff::{json_patch_path_converter, PathStep};
///
/// assert_eq!(json_patch_path_converter(&[]), "");
/// assert_eq!(json_patch_path_converter(&["b".into(), PathStep::Index(2)]), "/b/2");
/// assert_eq!(json_patch_path_converter(&["a/b".into()]), "/a/b");
/// ```
pub fn json_patch_path_converter(path: &[PathStep]) -> String {
    let mut out = String::with_capacity(path.len() * 8);
    for step in path {
        out.push('/');
        out.push_str(&step.to_string());
    }
    out
}

/// Renders a path as an escaped JSON Pointer (RFC 6901).
///
/// # Example
///
/// ```
/// use collection_diff::json_pointer_path_converter;
///
/// assert_eq!(json_pointer_path_converter(&["a/b".into(), "~".into()]), "/a~1b/~0");
/// ```
pub fn json_pointer_path_converter(path: &[PathStep]) -> String {
    format_json_pointer(path)
}
