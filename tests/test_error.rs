use domtree::{Dom, Error, ErrorKind};

#[test]
fn test_error_kinds() {
    let mut dom = Dom::new();
    let doc = dom.parse_string(r#"<a x="1"><b/></a>"#).unwrap();
    let a = dom.document_element(doc).unwrap();
    let b = dom.first_child(a).unwrap();
    let other = dom.parse_string(r#"<other/>"#).unwrap();
    let other_el = dom.document_element(other).unwrap();

    let cases: Vec<(Error, ErrorKind)> = vec![
        (dom.append_child(b, a).unwrap_err(), ErrorKind::Structure),
        (dom.remove_child(b, a).unwrap_err(), ErrorKind::NotFound),
        (dom.get_attribute(a, "y").unwrap_err(), ErrorKind::NotFound),
        (dom.append_child(other_el, b).unwrap_err(), ErrorKind::CrossDocument),
        (dom.load_json("[{}]").unwrap_err(), ErrorKind::Format),
        (dom.load_json("[{").unwrap_err(), ErrorKind::Parse),
        (dom.parse_string("<a></b>").unwrap_err(), ErrorKind::Parse),
        (dom.select(a, "@x:0").unwrap_err(), ErrorKind::Type),
        (dom.select(a, "*:5").unwrap_err(), ErrorKind::Index),
    ];
    for (err, kind) in cases {
        assert_eq!(err.kind(), kind, "{}", err);
    }
}

#[test]
fn test_error_display() {
    let mut dom = Dom::new();
    let doc = dom.parse_string(r#"<a/>"#).unwrap();
    let a = dom.document_element(doc).unwrap();
    let err = dom.get_attribute(a, "missing").unwrap_err();
    assert_eq!(err.to_string(), "attribute not found: missing");
    let err = dom.select(a, "*:3").unwrap_err();
    assert_eq!(err.to_string(), "index 3 out of range for 0 matches");
}

#[test]
fn test_error_source() {
    let mut dom = Dom::new();
    let err = dom.load_json("not json").unwrap_err();
    assert!(std::error::Error::source(&err).is_some());
    let err = dom.load_json("[]").unwrap_err();
    assert!(std::error::Error::source(&err).is_none());
}
