use domtree::{Dom, Error, ErrorKind};

#[test]
fn test_parse_invalid_close_tag() {
    let xml = r#"<doc></a></doc>"#;
    let mut dom = Dom::new();
    let err = dom.parse_string(xml).unwrap_err();
    assert!(
        matches!(&err, Error::InvalidCloseTag(expected, found) if expected == "doc" && found == "a")
    );
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn test_parse_invalid_close_tag_prefix() {
    let xml = r#"<doc xmlns:a="http://example.com"></a:doc></doc>"#;
    let mut dom = Dom::new();
    let err = dom.parse_string(xml).unwrap_err();
    assert!(matches!(err, Error::InvalidCloseTag(_, _)));
}

#[test]
fn test_unknown_prefix() {
    let xml = r#"<doc><a:p/></doc>"#;
    let mut dom = Dom::new();
    let err = dom.parse_string(xml).unwrap_err();
    assert!(matches!(&err, Error::UnknownPrefix(prefix) if prefix == "a"));
}

#[test]
fn test_prefix_out_of_scope() {
    let xml = r#"<doc><a xmlns:x="urn:x"/><x:b/></doc>"#;
    let mut dom = Dom::new();
    let err = dom.parse_string(xml).unwrap_err();
    assert!(matches!(err, Error::UnknownPrefix(_)));
}

#[test]
fn test_parser_error() {
    let xml = r#"<doc><"#;
    let mut dom = Dom::new();
    let err = dom.parse_string(xml).unwrap_err();
    assert!(matches!(err, Error::Parser(_)));
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn test_duplicate_attribute() {
    let xml = r#"<doc a="1" a="2"/>"#;
    let mut dom = Dom::new();
    let err = dom.parse_string(xml).unwrap_err();
    assert!(matches!(&err, Error::DuplicateAttribute(name) if name == "a"));
}

#[test]
fn test_duplicate_attribute_with_prefix() {
    let xml = r#"<doc xmlns:a="http://example.com" a:b="1" a:b="2"/>"#;
    let mut dom = Dom::new();
    let err = dom.parse_string(xml).unwrap_err();
    assert!(matches!(&err, Error::DuplicateAttribute(name) if name == "a:b"));
}

#[test]
fn test_unclosed_tag() {
    let mut dom = Dom::new();
    let err = dom.parse_string(r#"<a><b></a>"#).unwrap_err();
    assert!(matches!(err, Error::InvalidCloseTag(_, _)));
}

#[test]
fn test_unclosed_tag_at_end() {
    let mut dom = Dom::new();
    let err = dom.parse_string(r#"<a>"#).unwrap_err();
    assert!(matches!(err, Error::UnclosedTag));
}

#[test]
fn test_unknown_entity() {
    let mut dom = Dom::new();
    let err = dom.parse_string(r#"<a>&nbsp;</a>"#).unwrap_err();
    assert!(matches!(err, Error::InvalidEntity(_)));
}

#[test]
fn test_no_document_element() {
    let mut dom = Dom::new();
    let err = dom.parse_string(r#"<!--only a comment-->"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Structure);
}

#[test]
fn test_missing_file() {
    let mut dom = Dom::new();
    let err = dom.parse("/nonexistent/domtree/missing.xml").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_malformed_bytes() {
    let mut dom = Dom::new();
    let err = dom
        .parse_bytes(b"<?xml version=\"1.0\" encoding=\"UTF-8\"?><a>caf\xc3</a>")
        .unwrap_err();
    assert!(matches!(err, Error::MalformedEncoding(_)));
    assert_eq!(err.kind(), ErrorKind::Parse);
}
