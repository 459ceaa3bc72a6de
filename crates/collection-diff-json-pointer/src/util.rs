use crate::types::PathStep;

fn push_escaped(out: &mut String, component: &str) {
    for c in component.chars() {
        match c {
            '~' => out.push_str("~0"),
            '/' => out.push_str("~1"),
            _ => out.push(c),
        }
    }
}

/// Escapes one reference token: `~` becomes `~0` and `/` becomes `~1`.
///
/// ```
/// use collection_diff_json_pointer::escape_component;
///
/// assert_eq!(escape_component("m~n/o"), "m~0n~1o");
/// ```
pub fn escape_component(component: &str) -> String {
    let mut out = String::with_capacity(component.len());
    push_escaped(&mut out, component);
    out
}

/// Renders a path as a JSON Pointer, `""` for the root.
///
/// ```
/// use collection_diff_json_pointer::{format_json_pointer, PathStep};
///
/// assert_eq!(format_json_pointer(&[]), "");
/// assert_eq!(
///     format_json_pointer(&[PathStep::from("a/b"), PathStep::Index(1)]),
///     "/a~1b/1",
/// );
/// ```
pub fn format_json_pointer(path: &[PathStep]) -> String {
    let mut out = String::new();
    for step in path {
        out.push('/');
        match step {
            PathStep::Index(idx) => out.push_str(&idx.to_string()),
            PathStep::Key(key) => push_escaped(&mut out, key),
        }
    }
    out
}
