use domtree::{Dom, Error, Value, ValueType};

#[test]
fn test_document_element() {
    let mut dom = Dom::new();
    let doc = dom.parse_string(r#"<!--c--><a/>"#).unwrap();
    let a = dom.document_element(doc).unwrap();
    assert_eq!(dom.element_name(a), Some("a"));
    assert_eq!(dom.parent(a), Some(doc));
}

#[test]
fn test_document_element_not_a_document() {
    let mut dom = Dom::new();
    let doc = dom.parse_string(r#"<a/>"#).unwrap();
    let a = dom.document_element(doc).unwrap();
    assert!(matches!(
        dom.document_element(a),
        Err(Error::NotDocument(node)) if node == a
    ));
}

#[test]
fn test_document_element_missing() {
    let mut dom = Dom::new();
    let doc = dom.new_document();
    assert!(matches!(
        dom.document_element(doc),
        Err(Error::NoDocumentElement(_))
    ));
}

#[test]
fn test_owner_document() {
    let mut dom = Dom::new();
    let doc = dom.parse_string(r#"<a><b>text</b></a>"#).unwrap();
    let a = dom.document_element(doc).unwrap();
    let b = dom.first_child(a).unwrap();
    let text = dom.first_child(b).unwrap();
    assert_eq!(dom.owner_document(doc), None);
    assert_eq!(dom.owner_document(a), Some(doc));
    assert_eq!(dom.owner_document(text), Some(doc));
    // unattached nodes are still owned
    let c = dom.create_element(doc, "c").unwrap();
    assert_eq!(dom.parent(c), None);
    assert_eq!(dom.owner_document(c), Some(doc));
}

#[test]
fn test_siblings() {
    let mut dom = Dom::new();
    let doc = dom.parse_string(r#"<p><a/>text<!--c--></p>"#).unwrap();
    let p = dom.document_element(doc).unwrap();
    let a = dom.first_child(p).unwrap();
    let text = dom.next_sibling(a).unwrap();
    let comment = dom.last_child(p).unwrap();
    assert_eq!(dom.next_sibling(text), Some(comment));
    assert_eq!(dom.previous_sibling(text), Some(a));
    assert_eq!(dom.previous_sibling(a), None);
    assert_eq!(dom.next_sibling(comment), None);
    assert_eq!(dom.children(p).collect::<Vec<_>>(), vec![a, text, comment]);
}

#[test]
fn test_value_types() {
    let mut dom = Dom::new();
    let doc = dom
        .parse_string(r#"<p>text<!--c--><?pi data?><![CDATA[raw]]></p>"#)
        .unwrap();
    let p = dom.document_element(doc).unwrap();
    let types = dom
        .children(p)
        .map(|child| dom.value_type(child))
        .collect::<Vec<_>>();
    assert_eq!(
        types,
        vec![
            ValueType::Text,
            ValueType::Comment,
            ValueType::ProcessingInstruction,
            ValueType::CData
        ]
    );
    assert_eq!(dom.value_type(doc), ValueType::Document);
    assert_eq!(dom.value_type(p), ValueType::Element);
}

#[test]
fn test_value_access() {
    let mut dom = Dom::new();
    let doc = dom
        .parse_string(r#"<p>text<!--c--><?pi data?><![CDATA[raw]]></p>"#)
        .unwrap();
    let p = dom.document_element(doc).unwrap();
    let children = dom.children(p).collect::<Vec<_>>();
    assert_eq!(dom.text_str(children[0]), Some("text"));
    assert_eq!(dom.comment_str(children[1]), Some("c"));
    let pi = dom.processing_instruction(children[2]).unwrap();
    assert_eq!(pi.target(), "pi");
    assert_eq!(pi.data(), "data");
    assert_eq!(dom.cdata_str(children[3]), Some("raw"));
    // wrong kind
    assert_eq!(dom.text_str(children[1]), None);
    assert!(dom.element(children[0]).is_none());
}

#[test]
fn test_value_mut() {
    let mut dom = Dom::new();
    let doc = dom.parse_string(r#"<p><!--c--></p>"#).unwrap();
    let p = dom.document_element(doc).unwrap();
    let comment = dom.first_child(p).unwrap();
    if let Value::Comment(comment) = dom.value_mut(comment) {
        comment.set("changed");
    }
    dom.element_mut(p).unwrap().set_attribute("x", "1");
    assert_eq!(dom.to_string(doc), r#"<p x="1"><!--changed--></p>"#);
}

#[test]
fn test_get_attribute() {
    let mut dom = Dom::new();
    let doc = dom.parse_string(r#"<p empty="" x="1"/>"#).unwrap();
    let p = dom.document_element(doc).unwrap();
    assert_eq!(dom.get_attribute(p, "x").unwrap(), "1");
    assert_eq!(dom.get_attribute(p, "empty").unwrap(), "");
    assert!(matches!(
        dom.get_attribute(p, "missing"),
        Err(Error::AttributeNotFound(name)) if name == "missing"
    ));
}

#[test]
fn test_child_index() {
    let mut dom = Dom::new();
    let doc = dom.parse_string(r#"<p><a/><b/></p>"#).unwrap();
    let p = dom.document_element(doc).unwrap();
    let b = dom.last_child(p).unwrap();
    assert_eq!(dom.child_index(p, b), Some(1));
    assert_eq!(dom.child_index(doc, b), None);
}

#[test]
fn test_descendants() {
    let mut dom = Dom::new();
    let doc = dom.parse_string(r#"<a><b><c/></b><d/></a>"#).unwrap();
    let names = dom
        .descendants(doc)
        .filter_map(|node| dom.element_name(node))
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["a", "b", "c", "d"]);
}
