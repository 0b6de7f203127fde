//! Proptest support
//!
//! Proptests allow you to test for *properties* of your code that must hold
//! for arbitrary data. This module generates arbitrary
//! [`fixed::Document`](crate::fixed::Document) values that you can build
//! into a tree.
//!
//! This can be enabled by adding the `proptest` feature to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! domtree = { version = "0.1", features = ["proptest"] }
//! ```
//!
//! See the [`proptest`](https://docs.rs/proptest/latest/proptest/)
//! documentation for more information.

use ahash::HashSet;
use proptest::prelude::*;

use crate::fixed::{Content, Document, DocumentContent, Element, ProcessingInstruction};

const NAMESPACES: &[&str] = &["http://example.com/x", "http://example.com/y"];
const ELEMENT_NAMES: &[&str] = &["a", "b", "c", "d", "e"];
const ATTRIBUTE_NAMES: &[&str] = &["q", "r", "s"];
const PI_NAMES: &[&str] = &["pi1", "pi2", "pi3", "pi4", "pi5"];
const XML_STRING: &str = "[\u{000a}\u{0009}\u{0020}-\u{D7FF}\u{E000}-\u{FFFD}]*";

fn arb_namespace() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(NAMESPACES).prop_map(str::to_string))
}

fn arb_attribute() -> impl Strategy<Value = (String, String)> {
    (prop::sample::select(ATTRIBUTE_NAMES), XML_STRING)
        .prop_map(|(name, value)| (name.to_string(), value))
}

fn arb_attributes() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(arb_attribute(), 0..4).prop_map(unduplicate_attributes)
}

fn arb_processing_instruction() -> impl Strategy<Value = ProcessingInstruction> {
    (prop::sample::select(PI_NAMES), XML_STRING).prop_map(|(target, data)| {
        ProcessingInstruction {
            target: target.to_string(),
            data,
        }
    })
}

fn arb_content() -> impl Strategy<Value = Content> {
    let leaf = prop_oneof![
        XML_STRING.prop_map(Content::Text),
        XML_STRING.prop_map(Content::Comment),
        arb_processing_instruction().prop_map(Content::ProcessingInstruction),
        XML_STRING.prop_map(Content::CData),
    ];

    leaf.prop_recursive(
        6,   // levels deep
        128, // maximum size of 128 nodes
        8,   // up to 8 items per collection
        |inner| {
            (
                prop::sample::select(ELEMENT_NAMES),
                arb_namespace(),
                arb_attributes(),
                prop::collection::vec(inner, 0..8),
            )
                .prop_map(|(name, namespace, attributes, children)| {
                    Content::Element(Element {
                        name: name.to_string(),
                        namespace,
                        attributes,
                        children,
                    })
                })
        },
    )
}

prop_compose! {
    fn arb_element()(name in prop::sample::select(ELEMENT_NAMES),
                     namespace in arb_namespace(),
                     attributes in arb_attributes(),
                     children in prop::collection::vec(arb_content(), 0..8)) -> Element {
        Element {
            name: name.to_string(),
            namespace,
            attributes,
            children,
        }
    }
}

fn arb_document_content() -> impl Strategy<Value = DocumentContent> {
    prop_oneof![
        XML_STRING.prop_map(DocumentContent::Comment),
        arb_processing_instruction().prop_map(DocumentContent::ProcessingInstruction),
    ]
}

fn unduplicate_attributes(attributes: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut seen = HashSet::default();
    attributes
        .into_iter()
        .filter(|(name, _)| seen.insert(name.clone()))
        .collect()
}

/// Generate an arbitrary document.
///
/// It may have comments and processing instructions around the document
/// element. Build it into a tree with its
/// [`build`](crate::fixed::Document::build) method.
///
/// ```notrust
/// use domtree::proptest::arb_document;
/// use domtree::Dom;
///
/// proptest! {
///   #[test]
///   fn test_json_round_trip(document in arb_document()) {
///     let mut dom = Dom::new();
///     let doc = document.build(&mut dom).unwrap();
///     let loaded = dom.load_json(&dom.to_json(doc).unwrap()).unwrap();
///     prop_assert!(dom.compare(doc, loaded));
///   }
/// }
/// ```
pub fn arb_document() -> impl Strategy<Value = Document> {
    (
        prop::collection::vec(arb_document_content(), 0..4),
        arb_element(),
        prop::collection::vec(arb_document_content(), 0..4),
    )
        .prop_map(|(before, document_element, after)| Document {
            before,
            document_element,
            after,
        })
}
