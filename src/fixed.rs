//! A fixed representation of a tree of nodes.
//!
//! Trees in a [`Dom`](crate::Dom) are mutable and live in its arena. A fixed
//! tree is an owned value you can create and store separately. It turns into
//! builder [`Event`]s, so it can be built into any
//! [`DocumentFactory`].
//!
//! ```rust
//! use domtree::fixed;
//!
//! let document = fixed::Document {
//!     before: vec![],
//!     document_element: fixed::Element {
//!         name: "foo".to_string(),
//!         namespace: None,
//!         attributes: vec![("a".to_string(), "1".to_string())],
//!         children: vec![fixed::Content::Text("Example".to_string())],
//!     },
//!     after: vec![],
//! };
//!
//! let mut dom = domtree::Dom::new();
//! let doc = document.build(&mut dom)?;
//! assert_eq!(dom.to_string(doc), r#"<foo a="1">Example</foo>"#);
//! # Ok::<(), domtree::Error>(())
//! ```

use crate::builder::{Builder, Event};
use crate::error::Error;
use crate::factory::DocumentFactory;

/// A fixed representation of a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Document {
    /// Comments and processing instructions before the document element
    pub before: Vec<DocumentContent>,
    /// The document element
    pub document_element: Element,
    /// Comments and processing instructions after the document element
    pub after: Vec<DocumentContent>,
}

/// A fixed representation of an element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element {
    /// Name of element, including any prefix
    pub name: String,
    /// Namespace URI
    pub namespace: Option<String>,
    /// Attributes, in order. Names should be unique; a later duplicate
    /// replaces the earlier value.
    pub attributes: Vec<(String, String)>,
    /// Children
    pub children: Vec<Content>,
}

/// A fixed representation of element content
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Content {
    Text(String),
    Comment(String),
    ProcessingInstruction(ProcessingInstruction),
    CData(String),
    Element(Element),
}

/// Content that is allowed next to the document element
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocumentContent {
    Comment(String),
    ProcessingInstruction(ProcessingInstruction),
}

/// A fixed representation of a processing instruction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProcessingInstruction {
    pub target: String,
    /// Data; empty if there is none
    pub data: String,
}

impl ProcessingInstruction {
    fn event(&self) -> Event {
        Event::ProcessingInstruction {
            target: self.target.clone(),
            data: self.data.clone(),
        }
    }
}

impl DocumentContent {
    fn event(&self) -> Event {
        match self {
            DocumentContent::Comment(comment) => Event::Comment(comment.clone()),
            DocumentContent::ProcessingInstruction(pi) => pi.event(),
        }
    }
}

impl Content {
    fn push_events(&self, events: &mut Vec<Event>) {
        match self {
            Content::Text(text) => events.push(Event::Text(text.clone())),
            Content::Comment(comment) => events.push(Event::Comment(comment.clone())),
            Content::ProcessingInstruction(pi) => events.push(pi.event()),
            Content::CData(text) => events.push(Event::CData(text.clone())),
            Content::Element(element) => element.push_events(events),
        }
    }
}

impl Element {
    fn push_events(&self, events: &mut Vec<Event>) {
        events.push(Event::StartElement {
            name: self.name.clone(),
            namespace: self.namespace.clone(),
            attributes: self.attributes.clone(),
        });
        for child in &self.children {
            child.push_events(events);
        }
        events.push(Event::EndElement);
    }
}

impl Document {
    /// The builder events for this document, in document order.
    pub fn events(&self) -> Vec<Event> {
        let mut events = self.before.iter().map(DocumentContent::event).collect::<Vec<_>>();
        self.document_element.push_events(&mut events);
        events.extend(self.after.iter().map(DocumentContent::event));
        events
    }

    /// Build the document with a factory.
    pub fn build<F: DocumentFactory>(&self, factory: &mut F) -> Result<F::Handle, Error> {
        Builder::build(factory, self.events())
    }
}
