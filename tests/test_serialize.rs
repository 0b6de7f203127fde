use domtree::Dom;
use rstest::rstest;

#[rstest]
#[case(r#"<root><a>1</a><b>2</b></root>"#)]
#[case(r#"<foo:root xmlns:foo="http://example.com"><foo:a>1</foo:a><foo:b>2</foo:b></foo:root>"#)]
#[case(r#"<root xmlns:foo="http://example.com"><a>1</a><foo:b>2</foo:b></root>"#)]
#[case(r#"<root xmlns="http://example.com"><a>1</a><b>2</b></root>"#)]
#[case(r#"<!--before--><root/><?after?>"#)]
#[case(r#"<root><?pi some data?><![CDATA[<raw> & ]]></root>"#)]
#[case(r#"<root>A &amp; B &lt; C</root>"#)]
fn test_roundtrip(#[case] xml: &str) {
    let mut dom = Dom::new();
    let doc = dom.parse_string(xml).unwrap();
    assert_eq!(dom.to_string(doc), xml);
}

#[test]
fn test_serialize_empty_element() {
    let mut dom = Dom::new();
    let doc = dom.parse_string(r#"<a><b></b></a>"#).unwrap();
    assert_eq!(dom.to_string(doc), r#"<a><b/></a>"#);
}

#[test]
fn test_serialize_attribute_escaping() {
    let mut dom = Dom::new();
    let doc = dom.parse_string(r#"<a/>"#).unwrap();
    let a = dom.document_element(doc).unwrap();
    dom.set_attribute(a, "x", "say \"<hi>\" & bye\n").unwrap();
    insta::assert_snapshot!(dom.to_string(doc), @r###"<a x="say &quot;&lt;hi>&quot; &amp; bye&#10;"/>"###);
}

#[test]
fn test_serialize_text_escaping() {
    let mut dom = Dom::new();
    let doc = dom.new_document();
    let a = dom.create_element(doc, "a").unwrap();
    dom.append_child(doc, a).unwrap();
    let text = dom.create_text_node(doc, "1 < 2 && 3 > 2").unwrap();
    dom.append_child(a, text).unwrap();
    insta::assert_snapshot!(dom.to_string(doc), @"<a>1 &lt; 2 &amp;&amp; 3 &gt; 2</a>");
}

#[test]
fn test_serialize_subtree() {
    let mut dom = Dom::new();
    let doc = dom.parse_string(r#"<a><b x="1">text</b><c/></a>"#).unwrap();
    let a = dom.document_element(doc).unwrap();
    let b = dom.first_child(a).unwrap();
    assert_eq!(dom.to_string(b), r#"<b x="1">text</b>"#);
    let text = dom.first_child(b).unwrap();
    assert_eq!(dom.to_string(text), "text");
}

#[test]
fn test_serialize_free_attribute() {
    let mut dom = Dom::new();
    let doc = dom.new_document();
    let attribute = dom.create_attribute(doc, "x", "a\"b").unwrap();
    assert_eq!(dom.to_string(attribute), r#"x="a&quot;b""#);
}

#[test]
fn test_write() {
    let mut dom = Dom::new();
    let doc = dom.parse_string(r#"<a><b/></a>"#).unwrap();
    let mut buf = Vec::new();
    dom.write(doc, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), r#"<a><b/></a>"#);
}
