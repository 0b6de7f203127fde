use std::io;

use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::domdata::{Dom, Node};
use crate::error::Error;
use crate::xmlvalue::Value;

use super::{Parameters, CDATA, COMMENT, DATA, DOCUMENT, NAMESPACE, PROCESSING_INSTRUCTION, TAG, TARGET};

/// Encodes a tree in the JSON form.
///
/// The saver borrows the tree; it implements [`Serialize`], so it can also
/// be handed to any serde serializer.
///
/// ```rust
/// use domtree::{Dom, Parameters, Saver};
///
/// let mut dom = Dom::new();
/// let doc = dom.parse_string("<a><b/></a>")?;
/// let saver = Saver::new(&dom, doc).with_parameters(Parameters { pretty: true });
/// assert_eq!(
///     saver.to_json()?,
///     r##"[
///   {
///     "#tag": "a"
///   },
///   [
///     {
///       "#tag": "b"
///     }
///   ]
/// ]"##
/// );
/// # Ok::<(), domtree::Error>(())
/// ```
pub struct Saver<'a> {
    dom: &'a Dom,
    node: Node,
    parameters: Parameters,
}

impl<'a> Saver<'a> {
    /// Create a saver for `node` and everything below it.
    pub fn new(dom: &'a Dom, node: Node) -> Self {
        Saver {
            dom,
            node,
            parameters: Parameters::default(),
        }
    }

    /// Use these output parameters.
    pub fn with_parameters(self, parameters: Parameters) -> Self {
        Saver { parameters, ..self }
    }

    /// The JSON text.
    pub fn to_json(&self) -> Result<String, Error> {
        self.check()?;
        let json = if self.parameters.pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        debug!(bytes = json.len(), "saved tree as JSON");
        Ok(json)
    }

    /// Write the JSON text to a writer.
    pub fn to_writer<W: io::Write>(&self, writer: W) -> Result<(), Error> {
        self.check()?;
        if self.parameters.pretty {
            serde_json::to_writer_pretty(writer, self)?;
        } else {
            serde_json::to_writer(writer, self)?;
        }
        Ok(())
    }

    /// The encoding as a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, Error> {
        self.check()?;
        Ok(serde_json::to_value(self)?)
    }

    // Everything that can't be encoded is rejected up front, so a failure
    // is a format error rather than a serializer error.
    fn check(&self) -> Result<(), Error> {
        if self.dom.is_document(self.node) {
            self.dom.document_element(self.node)?;
        }
        for node in self.dom.descendants(self.node) {
            match self.dom.value(node) {
                Value::Attribute(attribute) => {
                    return Err(Error::Format(format!(
                        "attribute node {} cannot be encoded on its own",
                        attribute.name()
                    )));
                }
                Value::Element(element) => {
                    if let Some(name) = element.attributes().keys().find(|name| name.starts_with('#')) {
                        return Err(Error::Format(format!(
                            "attribute name {} clashes with reserved keys",
                            name
                        )));
                    }
                    if element.name().starts_with('#') {
                        return Err(Error::Format(format!(
                            "element name {} clashes with reserved tags",
                            element.name()
                        )));
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }
}

impl Serialize for Saver<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Encoded {
            dom: self.dom,
            node: self.node,
        }
        .serialize(serializer)
    }
}

struct Encoded<'a> {
    dom: &'a Dom,
    node: Node,
}

impl Encoded<'_> {
    fn child(&self, node: Node) -> Self {
        Encoded {
            dom: self.dom,
            node,
        }
    }

    fn serialize_with_children<S: Serializer>(
        &self,
        serializer: S,
        descriptor: Descriptor,
    ) -> Result<S::Ok, S::Error> {
        let len = self.dom.children(self.node).count() + 1;
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&descriptor)?;
        for child in self.dom.children(self.node) {
            seq.serialize_element(&self.child(child))?;
        }
        seq.end()
    }
}

fn serialize_leaf<S: Serializer>(serializer: S, descriptor: Descriptor) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(1))?;
    seq.serialize_element(&descriptor)?;
    seq.end()
}

impl Serialize for Encoded<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.dom.value(self.node) {
            Value::Document => {
                let mut children = self.dom.children(self.node);
                match (children.next(), children.next()) {
                    (Some(only), None) if self.dom.is_element(only) => {
                        self.child(only).serialize(serializer)
                    }
                    _ => self.serialize_with_children(serializer, Descriptor::new(DOCUMENT)),
                }
            }
            Value::Element(element) => {
                let mut descriptor = Descriptor::new(element.name());
                if let Some(namespace) = element.namespace() {
                    descriptor.entries.push((NAMESPACE, namespace));
                }
                descriptor.entries.extend(
                    element
                        .attributes()
                        .iter()
                        .map(|(name, value)| (name.as_str(), value.as_str())),
                );
                self.serialize_with_children(serializer, descriptor)
            }
            Value::Text(text) => serializer.serialize_str(text.get()),
            Value::Comment(comment) => {
                serialize_leaf(serializer, Descriptor::new(COMMENT).with(DATA, comment.get()))
            }
            Value::ProcessingInstruction(pi) => serialize_leaf(
                serializer,
                Descriptor::new(PROCESSING_INSTRUCTION)
                    .with(TARGET, pi.target())
                    .with(DATA, pi.data()),
            ),
            Value::CData(cdata) => {
                serialize_leaf(serializer, Descriptor::new(CDATA).with(DATA, cdata.get()))
            }
            Value::Attribute(attribute) => Err(S::Error::custom(format!(
                "attribute node {} cannot be encoded on its own",
                attribute.name()
            ))),
        }
    }
}

// The object at the head of an encoded array: the tag, then other keys in
// order.
struct Descriptor<'a> {
    tag: &'a str,
    entries: Vec<(&'a str, &'a str)>,
}

impl<'a> Descriptor<'a> {
    fn new(tag: &'a str) -> Self {
        Descriptor {
            tag,
            entries: Vec::new(),
        }
    }

    fn with(mut self, key: &'a str, value: &'a str) -> Self {
        self.entries.push((key, value));
        self
    }
}

impl Serialize for Descriptor<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len() + 1))?;
        map.serialize_entry(TAG, self.tag)?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
