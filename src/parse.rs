use std::borrow::Cow;
use std::path::Path;

use ahash::HashMap;
use tracing::debug;
use xmlparser::{ElementEnd, Token, Tokenizer};

use crate::builder::{Builder, Event};
use crate::domdata::{Dom, Node};
use crate::encoding::decode;
use crate::entity::parse_entities;
use crate::error::Error;

/// Options for markup parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Drop whitespace-only text inside elements.
    ///
    /// Whitespace outside the document element is always dropped.
    pub strip_whitespace: bool,
}

const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

struct PendingElement {
    prefix: String,
    local: String,
    attributes: Vec<(String, String)>,
    declarations: HashMap<String, String>,
}

struct OpenElement {
    name: String,
    declarations: HashMap<String, String>,
}

// Turns tokens into builder events, keeping track of open tags and
// namespace declarations in scope.
struct EventReader<'o> {
    options: &'o ParseOptions,
    pending: Option<PendingElement>,
    open: Vec<OpenElement>,
}

impl<'o> EventReader<'o> {
    fn new(options: &'o ParseOptions) -> Self {
        EventReader {
            options,
            pending: None,
            open: Vec::new(),
        }
    }

    fn lookup_namespace(&self, prefix: &str, own: &HashMap<String, String>) -> Option<String> {
        if prefix == "xml" {
            return Some(XML_NAMESPACE.to_string());
        }
        std::iter::once(own)
            .chain(self.open.iter().rev().map(|open| &open.declarations))
            .find_map(|declarations| declarations.get(prefix))
            .cloned()
    }

    fn start(&mut self, pending: PendingElement) -> Result<(Event, OpenElement), Error> {
        let namespace = self.lookup_namespace(&pending.prefix, &pending.declarations);
        if !pending.prefix.is_empty() && namespace.is_none() {
            return Err(Error::UnknownPrefix(pending.prefix));
        }
        let name = if pending.prefix.is_empty() {
            pending.local
        } else {
            format!("{}:{}", pending.prefix, pending.local)
        };
        let event = Event::StartElement {
            name: name.clone(),
            // an empty default namespace declaration undeclares it
            namespace: namespace.filter(|namespace| !namespace.is_empty()),
            attributes: pending.attributes,
        };
        let open = OpenElement {
            name,
            declarations: pending.declarations,
        };
        Ok((event, open))
    }

    fn token(
        &mut self,
        token: Token,
        emit: &mut impl FnMut(Event) -> Result<(), Error>,
    ) -> Result<(), Error> {
        match token {
            Token::ElementStart { prefix, local, .. } => {
                self.pending = Some(PendingElement {
                    prefix: prefix.as_str().to_string(),
                    local: local.as_str().to_string(),
                    attributes: Vec::new(),
                    declarations: HashMap::default(),
                });
            }
            Token::Attribute {
                prefix,
                local,
                value,
                ..
            } => {
                let pending = self.pending.as_mut().ok_or(Error::UnclosedTag)?;
                let name = if prefix.as_str().is_empty() {
                    local.as_str().to_string()
                } else {
                    format!("{}:{}", prefix.as_str(), local.as_str())
                };
                if pending.attributes.iter().any(|(existing, _)| *existing == name) {
                    return Err(Error::DuplicateAttribute(name));
                }
                let value = parse_entities(Cow::Borrowed(value.as_str()))?.into_owned();
                if prefix.as_str() == "xmlns" {
                    pending
                        .declarations
                        .insert(local.as_str().to_string(), value.clone());
                } else if prefix.as_str().is_empty() && local.as_str() == "xmlns" {
                    pending.declarations.insert(String::new(), value.clone());
                }
                pending.attributes.push((name, value));
            }
            Token::ElementEnd { end, .. } => match end {
                ElementEnd::Open => {
                    let pending = self.pending.take().ok_or(Error::UnclosedTag)?;
                    let (event, open) = self.start(pending)?;
                    emit(event)?;
                    self.open.push(open);
                }
                ElementEnd::Empty => {
                    let pending = self.pending.take().ok_or(Error::UnclosedTag)?;
                    let (event, _) = self.start(pending)?;
                    emit(event)?;
                    emit(Event::EndElement)?;
                }
                ElementEnd::Close(prefix, local) => {
                    let found = if prefix.as_str().is_empty() {
                        local.as_str().to_string()
                    } else {
                        format!("{}:{}", prefix.as_str(), local.as_str())
                    };
                    let open = self
                        .open
                        .pop()
                        .ok_or_else(|| Error::InvalidCloseTag(String::new(), found.clone()))?;
                    if open.name != found {
                        return Err(Error::InvalidCloseTag(open.name, found));
                    }
                    emit(Event::EndElement)?;
                }
            },
            Token::Text { text } => {
                let is_whitespace = text.as_str().trim().is_empty();
                if is_whitespace && (self.open.is_empty() || self.options.strip_whitespace) {
                    return Ok(());
                }
                let text = parse_entities(Cow::Borrowed(text.as_str()))?;
                emit(Event::Text(text.into_owned()))?;
            }
            Token::Cdata { text, .. } => {
                emit(Event::CData(text.as_str().to_string()))?;
            }
            Token::Comment { text, .. } => {
                emit(Event::Comment(text.as_str().to_string()))?;
            }
            Token::ProcessingInstruction {
                target, content, ..
            } => {
                emit(Event::ProcessingInstruction {
                    target: target.as_str().to_string(),
                    data: content.map(|c| c.as_str().to_string()).unwrap_or_default(),
                })?;
            }
            // the declaration and any DTD are not part of the tree
            Token::Declaration { .. }
            | Token::DtdStart { .. }
            | Token::EmptyDtd { .. }
            | Token::EntityDeclaration { .. }
            | Token::DtdEnd { .. } => {}
        }
        Ok(())
    }

    fn finish(&self) -> Result<(), Error> {
        if self.pending.is_some() || !self.open.is_empty() {
            return Err(Error::UnclosedTag);
        }
        Ok(())
    }
}

/// Read markup text as a sequence of builder events.
///
/// `emit` is called for each event in document order. This is how
/// [`Dom::parse_string`] drives its [`Builder`]; use it directly to feed
/// another [`DocumentFactory`](crate::DocumentFactory) or to record the
/// events.
pub fn read_events(
    xml: &str,
    options: &ParseOptions,
    mut emit: impl FnMut(Event) -> Result<(), Error>,
) -> Result<(), Error> {
    let mut reader = EventReader::new(options);
    for token in Tokenizer::from(xml) {
        reader.token(token?, &mut emit)?;
    }
    reader.finish()
}

/// ## Parsing
impl Dom {
    /// Parse a string containing markup into a document.
    ///
    /// ```rust
    /// let mut dom = domtree::Dom::new();
    /// let doc = dom.parse_string("<p>Example</p>")?;
    /// let p = dom.document_element(doc)?;
    /// assert_eq!(dom.text_str(dom.first_child(p).unwrap()), Some("Example"));
    /// # Ok::<(), domtree::Error>(())
    /// ```
    pub fn parse_string(&mut self, xml: &str) -> Result<Node, Error> {
        self.parse_string_with_options(xml, &ParseOptions::default())
    }

    /// Parse a string containing markup, with options.
    pub fn parse_string_with_options(
        &mut self,
        xml: &str,
        options: &ParseOptions,
    ) -> Result<Node, Error> {
        let mut builder = Builder::new(self);
        read_events(xml, options, |event| builder.feed(event))?;
        builder.finish()
    }

    /// Parse markup bytes, detecting their encoding.
    pub fn parse_bytes(&mut self, data: &[u8]) -> Result<Node, Error> {
        let (text, encoding) = decode(data)?;
        debug!(encoding = encoding.name(), "decoded markup");
        self.parse_string(&text)
    }

    /// Parse a markup file.
    pub fn parse<P: AsRef<Path>>(&mut self, path: P) -> Result<Node, Error> {
        let data = std::fs::read(path)?;
        self.parse_bytes(&data)
    }
}
