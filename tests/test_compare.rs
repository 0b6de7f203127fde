use domtree::Dom;

#[test]
fn test_compare() {
    let mut dom = Dom::new();
    let doc1 = dom.parse_string(r#"<a>text</a>"#).unwrap();
    let doc2 = dom.parse_string(r#"<a>text</a>"#).unwrap();

    assert!(dom.compare(doc1, doc2));
}

#[test]
fn test_compare_different_text() {
    let mut dom = Dom::new();
    let doc1 = dom.parse_string(r#"<a>text A</a>"#).unwrap();
    let doc2 = dom.parse_string(r#"<a>text B</a>"#).unwrap();

    assert!(!dom.compare(doc1, doc2));
}

#[test]
fn test_compare_different_structure() {
    let mut dom = Dom::new();
    let doc1 = dom.parse_string(r#"<a></a>"#).unwrap();
    let doc2 = dom.parse_string(r#"<a><b/></a>"#).unwrap();

    assert!(!dom.compare(doc1, doc2));
}

#[test]
fn test_compare_different_namespace() {
    let mut dom = Dom::new();
    let doc1 = dom
        .parse_string(r#"<x:a xmlns:x="http://example.com/a" xmlns:y="http://example.com/b"/>"#)
        .unwrap();
    let doc2 = dom
        .parse_string(r#"<x:a xmlns:y="http://example.com/a" xmlns:x="http://example.com/b"/>"#)
        .unwrap();

    assert!(!dom.compare(doc1, doc2));
}

#[test]
fn test_compare_attribute_order_ignored() {
    let mut dom = Dom::new();
    let doc1 = dom.parse_string(r#"<a x="1" y="2"/>"#).unwrap();
    let doc2 = dom.parse_string(r#"<a y="2" x="1"/>"#).unwrap();

    assert!(dom.compare(doc1, doc2));
}

#[test]
fn test_compare_different_attribute_value() {
    let mut dom = Dom::new();
    let doc1 = dom.parse_string(r#"<a x="1"/>"#).unwrap();
    let doc2 = dom.parse_string(r#"<a x="2"/>"#).unwrap();

    assert!(!dom.compare(doc1, doc2));
}

#[test]
fn test_compare_missing_attribute() {
    let mut dom = Dom::new();
    let doc1 = dom.parse_string(r#"<a x="1"/>"#).unwrap();
    let doc2 = dom.parse_string(r#"<a x="1" y="2"/>"#).unwrap();

    assert!(!dom.compare(doc1, doc2));
}

#[test]
fn test_compare_processing_instruction() {
    let mut dom = Dom::new();
    let doc1 = dom.parse_string(r#"<a><?p one?></a>"#).unwrap();
    let doc2 = dom.parse_string(r#"<a><?p two?></a>"#).unwrap();

    assert!(!dom.compare(doc1, doc2));
}

#[test]
fn test_compare_top_level_comment() {
    let mut dom = Dom::new();
    let doc1 = dom.parse_string(r#"<!--c--><a/>"#).unwrap();
    let doc2 = dom.parse_string(r#"<a/>"#).unwrap();

    assert!(!dom.compare(doc1, doc2));
}
