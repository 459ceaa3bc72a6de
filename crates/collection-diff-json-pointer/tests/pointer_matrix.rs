use collection_diff_json_pointer::{format_json_pointer, get_mut, Path, PathStep};
use serde_json::json;

#[test]
fn pointer_format_matrix() {
    let cases: Vec<(Path, &str)> = vec![
        (vec![], ""),
        (vec!["".into()], "/"),
        (vec!["foo".into(), "bar".into()], "/foo/bar"),
        (vec!["a~b".into(), "c/d".into()], "/a~0b/c~1d"),
        (vec!["arr".into(), PathStep::Index(0)], "/arr/0"),
        (vec!["~".into(), "/".into()], "/~0/~1"),
        (vec!["~01".into()], "/~001"),
    ];

    for (path, pointer) in cases {
        assert_eq!(format_json_pointer(&path), pointer, "{path:?}");
    }
}

#[test]
fn get_mut_matrix() {
    let mut doc = json!({"foo": {"bar": [10, 20, null]}, "a/b": {"~": 1}});
    let bar = |idx| vec![PathStep::from("foo"), PathStep::from("bar"), PathStep::Index(idx)];

    assert_eq!(get_mut(&mut doc, &bar(0)), Some(&mut json!(10)));
    assert_eq!(get_mut(&mut doc, &bar(2)), Some(&mut json!(null)));
    assert!(get_mut(&mut doc, &bar(3)).is_none());
    assert_eq!(get_mut(&mut doc, &["a/b".into(), "~".into()]), Some(&mut json!(1)));
}

#[test]
fn get_mut_edits_nested_slot() {
    let mut doc = json!({"items": [{"id": 1}, {"id": 2}]});
    let path = vec![PathStep::from("items"), PathStep::Index(1), PathStep::from("id")];
    if let Some(slot) = get_mut(&mut doc, &path) {
        *slot = json!(7);
    }
    assert_eq!(doc, json!({"items": [{"id": 1}, {"id": 7}]}));
}

#[test]
fn get_mut_on_missing_path() {
    let mut doc = json!({"arr": [1, 2, 3]});
    assert!(get_mut(&mut doc, &["arr".into(), "-".into()]).is_none());
    assert!(get_mut(&mut doc, &["nope".into(), PathStep::Index(0)]).is_none());
}
