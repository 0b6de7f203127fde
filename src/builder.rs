//! Event-driven tree construction.
//!
//! A [`Builder`] turns an ordered sequence of [`Event`]s into a tree. It makes
//! no assumption about where the events come from: the markup parser, the
//! JSON [`Loader`](crate::Loader) and hand-written code all go through the
//! same construction rules.
//!
//! ```rust
//! use domtree::{Builder, Dom};
//!
//! let mut dom = Dom::new();
//! let mut builder = Builder::new(&mut dom);
//! builder.start_element("greeting", vec![("lang".to_string(), "en".to_string())])?;
//! builder.text("hello")?;
//! builder.end_element()?;
//! let doc = builder.finish()?;
//!
//! assert_eq!(dom.to_string(doc), r#"<greeting lang="en">hello</greeting>"#);
//! # Ok::<(), domtree::Error>(())
//! ```

use tracing::{debug, trace};

use crate::error::Error;
use crate::factory::DocumentFactory;

/// A structural event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Open an element.
    StartElement {
        name: String,
        namespace: Option<String>,
        attributes: Vec<(String, String)>,
    },
    /// Close the most recently opened element.
    EndElement,
    Text(String),
    Comment(String),
    ProcessingInstruction { target: String, data: String },
    CData(String),
}

/// Where the builder is in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    /// The document element has not been opened yet.
    BeforeRoot,
    /// Inside the document element, with the given number of open elements.
    InElement(usize),
    /// The document element has been closed.
    Done,
}

/// Builds a tree from events, using a [`DocumentFactory`] to create nodes.
pub struct Builder<'a, F: DocumentFactory> {
    factory: &'a mut F,
    document: Option<F::Handle>,
    open_elements: Vec<F::Handle>,
    done: bool,
}

impl<'a, F: DocumentFactory> Builder<'a, F> {
    /// Create a builder that creates its nodes with `factory`.
    pub fn new(factory: &'a mut F) -> Self {
        Builder {
            factory,
            document: None,
            open_elements: Vec::new(),
            done: false,
        }
    }

    /// Build a document from a complete event sequence.
    pub fn build(
        factory: &'a mut F,
        events: impl IntoIterator<Item = Event>,
    ) -> Result<F::Handle, Error> {
        let mut builder = Builder::new(factory);
        for event in events {
            builder.feed(event)?;
        }
        builder.finish()
    }

    /// The current state.
    pub fn state(&self) -> BuilderState {
        if self.done {
            BuilderState::Done
        } else if self.open_elements.is_empty() {
            BuilderState::BeforeRoot
        } else {
            BuilderState::InElement(self.open_elements.len())
        }
    }

    /// The document being built. Created by the first event.
    pub fn document(&self) -> Option<F::Handle> {
        self.document
    }

    fn ensure_document(&mut self) -> F::Handle {
        match self.document {
            Some(document) => document,
            None => {
                let document = self.factory.create_document();
                self.document = Some(document);
                document
            }
        }
    }

    /// Process one event.
    pub fn feed(&mut self, event: Event) -> Result<(), Error> {
        trace!(?event, state = ?self.state(), "builder event");
        let document = self.ensure_document();
        match event {
            Event::StartElement {
                name,
                namespace,
                attributes,
            } => {
                if self.done {
                    return Err(Error::Unbalanced(format!(
                        "element <{}> after the document element was closed",
                        name
                    )));
                }
                let element = self.factory.create_element(
                    document,
                    &name,
                    namespace.as_deref(),
                    &attributes,
                )?;
                self.append(document, element)?;
                self.open_elements.push(element);
            }
            Event::EndElement => {
                if self.open_elements.pop().is_none() {
                    return Err(Error::Unbalanced(
                        "end element without an open element".into(),
                    ));
                }
                if self.open_elements.is_empty() {
                    self.done = true;
                }
            }
            Event::Text(text) => {
                let node = self.factory.create_text_node(document, &text)?;
                self.append(document, node)?;
            }
            Event::Comment(text) => {
                let node = self.factory.create_comment(document, &text)?;
                self.append(document, node)?;
            }
            Event::ProcessingInstruction { target, data } => {
                let node = self
                    .factory
                    .create_processing_instruction(document, &target, &data)?;
                self.append(document, node)?;
            }
            Event::CData(text) => {
                let node = self.factory.create_cdata_section(document, &text)?;
                self.append(document, node)?;
            }
        }
        Ok(())
    }

    // append under the innermost open element, or the document itself
    fn append(&mut self, document: F::Handle, node: F::Handle) -> Result<(), Error> {
        let parent = self.open_elements.last().copied().unwrap_or(document);
        self.factory.append_child(parent, node)
    }

    /// Open an element without a namespace.
    pub fn start_element(
        &mut self,
        name: &str,
        attributes: Vec<(String, String)>,
    ) -> Result<(), Error> {
        self.start_element_ns(name, None, attributes)
    }

    /// Open an element, optionally in a namespace.
    pub fn start_element_ns(
        &mut self,
        name: &str,
        namespace: Option<&str>,
        attributes: Vec<(String, String)>,
    ) -> Result<(), Error> {
        self.feed(Event::StartElement {
            name: name.to_string(),
            namespace: namespace.map(|s| s.to_string()),
            attributes,
        })
    }

    /// Close the innermost open element.
    pub fn end_element(&mut self) -> Result<(), Error> {
        self.feed(Event::EndElement)
    }

    /// Add a text node.
    pub fn text(&mut self, text: &str) -> Result<(), Error> {
        self.feed(Event::Text(text.to_string()))
    }

    /// Add a comment.
    pub fn comment(&mut self, text: &str) -> Result<(), Error> {
        self.feed(Event::Comment(text.to_string()))
    }

    /// Add a processing instruction.
    pub fn processing_instruction(&mut self, target: &str, data: &str) -> Result<(), Error> {
        self.feed(Event::ProcessingInstruction {
            target: target.to_string(),
            data: data.to_string(),
        })
    }

    /// Add a CDATA section.
    pub fn cdata(&mut self, text: &str) -> Result<(), Error> {
        self.feed(Event::CData(text.to_string()))
    }

    /// Finish building and return the document.
    ///
    /// Fails with [`Error::Unbalanced`] if the document element was never
    /// opened or is still open.
    pub fn finish(self) -> Result<F::Handle, Error> {
        match self.state() {
            BuilderState::Done => {}
            BuilderState::BeforeRoot => {
                return Err(Error::Unbalanced("no document element".into()));
            }
            BuilderState::InElement(depth) => {
                return Err(Error::Unbalanced(format!(
                    "{} element(s) still open at the end",
                    depth
                )));
            }
        }
        let document = self
            .document
            .ok_or_else(|| Error::Unbalanced("no document element".into()))?;
        debug!("builder finished document");
        Ok(document)
    }
}
