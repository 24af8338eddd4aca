//! Integration tests for canonical rendering.

use mutpath::path::{parse, List, Node, Object, Path, QuoteStyle, RenderOptions};

#[test]
fn test_bare_segments_stay_bare() {
    let path = parse("  spec . containers [ name : nginx ] . image ").unwrap();
    assert_eq!(path.to_string(), "spec.containers[name: nginx].image");
}

#[test]
fn test_quotes_only_when_needed() {
    let path = parse(r#""spec"."foo bar"['key': "*"]"#).unwrap();
    assert_eq!(path.to_string(), r#"spec."foo bar"[key: "*"]"#);
}

#[test]
fn test_glob_renders_bare_star() {
    let path = Path::new(vec![Object::new("containers").into(), List::glob("name").into()]);
    assert_eq!(path.to_string(), "containers[name: *]");
}

#[test]
fn test_empty_values_are_quoted() {
    let path = Path::new(vec![
        Object::new("foo").into(),
        Object::new("").into(),
        List::with_value("", "").into(),
    ]);
    assert_eq!(path.to_string(), r#"foo.""["": ""]"#);
    assert_eq!(parse(&path.to_string()).unwrap(), path);
}

#[test]
fn test_single_quote_style() {
    let path = parse(r#"spec."it's"[name: "say \"hi\""]"#).unwrap();
    let rendered = path.render_with(&RenderOptions::with_quote(QuoteStyle::Single));
    assert_eq!(rendered, r#"spec.'it\'s'[name: 'say "hi"']"#);
    assert_eq!(parse(&rendered).unwrap(), path);
}

#[test]
fn test_individual_nodes_render() {
    assert_eq!(Node::from(Object::new("a b")).render(), r#""a b""#);
    assert_eq!(Node::from(List::with_value("k", "v")).render(), "[k: v]");
    assert_eq!(List::glob("k").to_string(), "[k: *]");
    assert_eq!(Object::new("plain").to_string(), "plain");
}

#[test]
fn test_nested_paths_render_inline() {
    let inner = Path::new(vec![
        Object::new("containers").into(),
        List::glob("name").into(),
    ]);
    let tail = Path::new(vec![Object::new("image").into()]);
    let path = Path::new(vec![
        Object::new("spec").into(),
        inner.into(),
        Path::default().into(),
        tail.into(),
    ]);
    assert_eq!(path.to_string(), "spec.containers[name: *].image");

    // The rendering of a composed path parses to the flattened equivalent.
    let flat: Path = path.segments().into_iter().cloned().collect();
    assert_eq!(parse(&path.to_string()).unwrap(), flat);
}

#[test]
fn test_escape_symmetry() {
    let values = [
        "plain",
        "",
        "*",
        "with space",
        "quote\"inside",
        "apostrophe's",
        "back\\slash",
        "trailing\\",
        "\\\"",
        "line\nbreak",
        "mixed '\"\\\n",
    ];
    for value in values {
        for quote in [QuoteStyle::Double, QuoteStyle::Single] {
            let path = Path::new(vec![
                Object::new(value).into(),
                List::with_value(value, value).into(),
            ]);
            let rendered = path.render_with(&RenderOptions::with_quote(quote));
            assert_eq!(
                parse(&rendered).unwrap(),
                path,
                "value {:?} rendered as {:?}",
                value,
                rendered
            );
        }
    }
}
