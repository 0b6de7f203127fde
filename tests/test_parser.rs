use domtree::{Dom, ParseOptions};

#[test]
fn test_parse_string() {
    let mut dom = Dom::new();
    let doc = dom.parse_string(r#"<a x="1"><b>text</b></a>"#).unwrap();
    let a = dom.document_element(doc).unwrap();
    assert_eq!(dom.get_attribute(a, "x").unwrap(), "1");
    let b = dom.first_child(a).unwrap();
    assert_eq!(dom.element_name(b), Some("b"));
    assert_eq!(dom.text_str(dom.first_child(b).unwrap()), Some("text"));
}

#[test]
fn test_parse_entities() {
    let mut dom = Dom::new();
    let doc = dom
        .parse_string(r#"<a title="&quot;q&quot;">&lt;&amp;&gt; &#65;&#x42;</a>"#)
        .unwrap();
    let a = dom.document_element(doc).unwrap();
    assert_eq!(dom.get_attribute(a, "title").unwrap(), "\"q\"");
    assert_eq!(dom.text_str(dom.first_child(a).unwrap()), Some("<&> AB"));
}

#[test]
fn test_parse_cdata_is_not_decoded() {
    let mut dom = Dom::new();
    let doc = dom.parse_string(r#"<a><![CDATA[&amp;<b>]]></a>"#).unwrap();
    let a = dom.document_element(doc).unwrap();
    assert_eq!(dom.cdata_str(dom.first_child(a).unwrap()), Some("&amp;<b>"));
}

#[test]
fn test_parse_top_level_nodes() {
    let mut dom = Dom::new();
    let doc = dom
        .parse_string("<?xml version=\"1.0\"?>\n<!--before-->\n<a/>\n<?after data?>\n")
        .unwrap();
    let children = dom.children(doc).collect::<Vec<_>>();
    assert_eq!(children.len(), 3);
    assert_eq!(dom.comment_str(children[0]), Some("before"));
    assert!(dom.is_element(children[1]));
    assert_eq!(
        dom.processing_instruction(children[2]).unwrap().target(),
        "after"
    );
}

#[test]
fn test_parse_namespaces() {
    let mut dom = Dom::new();
    let doc = dom
        .parse_string(r#"<a xmlns="urn:a" xmlns:b="urn:b"><b:x/><y/></a>"#)
        .unwrap();
    let a = dom.document_element(doc).unwrap();
    let namespaces = dom
        .descendants(a)
        .filter_map(|node| dom.element(node))
        .map(|element| (element.name().to_string(), element.namespace().map(str::to_string)))
        .collect::<Vec<_>>();
    assert_eq!(
        namespaces,
        vec![
            ("a".to_string(), Some("urn:a".to_string())),
            ("b:x".to_string(), Some("urn:b".to_string())),
            ("y".to_string(), Some("urn:a".to_string())),
        ]
    );
}

#[test]
fn test_parse_strip_whitespace() {
    let mut dom = Dom::new();
    let xml = "<a>\n  <b> x </b>\n</a>";
    let doc = dom
        .parse_string_with_options(
            xml,
            &ParseOptions {
                strip_whitespace: true,
            },
        )
        .unwrap();
    assert_eq!(dom.to_string(doc), "<a><b> x </b></a>");

    let doc = dom.parse_string(xml).unwrap();
    assert_eq!(dom.to_string(doc), xml);
}

#[test]
fn test_parse_bytes() {
    let mut dom = Dom::new();
    let doc = dom
        .parse_bytes(b"<?xml version=\"1.0\" encoding=\"iso-8859-1\"?><a>caf\xe9</a>")
        .unwrap();
    let a = dom.document_element(doc).unwrap();
    assert_eq!(dom.text_str(dom.first_child(a).unwrap()), Some("café"));
}

#[test]
fn test_parse_file() {
    let path = std::env::temp_dir().join(format!("domtree-test-{}.xml", std::process::id()));
    std::fs::write(&path, "<a><b/></a>").unwrap();
    let mut dom = Dom::new();
    let doc = dom.parse(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(dom.to_string(doc), "<a><b/></a>");
}

#[test]
fn test_parse_many_documents_in_one_dom() {
    let mut dom = Dom::new();
    let doc1 = dom.parse_string("<a/>").unwrap();
    let doc2 = dom.parse_string("<b/>").unwrap();
    assert_ne!(doc1, doc2);
    assert_eq!(dom.to_string(doc1), "<a/>");
    assert_eq!(dom.to_string(doc2), "<b/>");
}
