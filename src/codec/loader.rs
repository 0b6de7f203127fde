use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::builder::{Builder, Event};
use crate::error::Error;
use crate::factory::DocumentFactory;

use super::{CDATA, COMMENT, DATA, DOCUMENT, NAMESPACE, PROCESSING_INSTRUCTION, TAG, TARGET};

/// Decodes the JSON form into a tree.
///
/// The decoded shape is turned into builder events and replayed through a
/// [`Builder`], so a loaded tree is built exactly like a parsed one. The
/// whole input is checked before the first node is created.
///
/// ```rust
/// use domtree::{Dom, Loader};
///
/// let mut dom = Dom::new();
/// let doc = Loader::new(&mut dom).load(r##"[{"#tag":"p","id":"x"},"hi"]"##)?;
/// assert_eq!(dom.to_string(doc), r#"<p id="x">hi</p>"#);
/// # Ok::<(), domtree::Error>(())
/// ```
pub struct Loader<'a, F: DocumentFactory> {
    factory: &'a mut F,
}

impl<'a, F: DocumentFactory> Loader<'a, F> {
    /// Create a loader that builds with `factory`.
    pub fn new(factory: &'a mut F) -> Self {
        Loader { factory }
    }

    /// Decode JSON text into a document.
    ///
    /// Every element adds a level of array nesting, so the JSON is read
    /// without a nesting limit.
    pub fn load(&mut self, json: &str) -> Result<F::Handle, Error> {
        let value = parse_unbounded(json)?;
        self.load_value(&value)
    }

    /// Decode an already parsed JSON value into a document.
    pub fn load_value(&mut self, value: &Value) -> Result<F::Handle, Error> {
        let events = document_events(value)?;
        debug!(events = events.len(), "decoded JSON tree");
        Builder::build(&mut *self.factory, events)
    }
}

fn parse_unbounded(json: &str) -> Result<Value, Error> {
    let mut parser = serde_json::Deserializer::from_str(json);
    parser.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut parser))?;
    parser.end()?;
    Ok(value)
}

/// The builder events for an encoded document.
///
/// The top level has to hold exactly one element, next to any comments and
/// processing instructions.
pub(crate) fn document_events(value: &Value) -> Result<Vec<Event>, Error> {
    let top = match split(value)? {
        Some((DOCUMENT, _, children)) => children,
        _ => std::slice::from_ref(value),
    };
    let mut events = Vec::new();
    let mut elements = 0;
    for child in top {
        match split(child)? {
            None => return Err(Error::Format("text cannot be at the top level".into())),
            Some((CDATA, _, _)) => {
                return Err(Error::Format(
                    "a CDATA section cannot be at the top level".into(),
                ))
            }
            Some((COMMENT | PROCESSING_INSTRUCTION, _, _)) => {}
            Some(_) => elements += 1,
        }
        node_events(child, &mut events)?;
    }
    if elements != 1 {
        return Err(Error::Format(format!(
            "a document needs exactly one element, found {}",
            elements
        )));
    }
    Ok(events)
}

// An encoded array as (tag, descriptor, children). `None` for a bare
// string.
fn split(value: &Value) -> Result<Option<(&str, &Map<String, Value>, &[Value])>, Error> {
    let items = match value {
        Value::String(_) => return Ok(None),
        Value::Array(items) => items,
        other => {
            return Err(Error::Format(format!(
                "expected an array or a string, found {}",
                other
            )))
        }
    };
    let (first, children) = items
        .split_first()
        .ok_or_else(|| Error::Format("empty array".into()))?;
    let descriptor = first
        .as_object()
        .ok_or_else(|| Error::Format(format!("expected a descriptor object, found {}", first)))?;
    let tag = match descriptor.get(TAG) {
        Some(Value::String(tag)) => tag.as_str(),
        Some(other) => {
            return Err(Error::Format(format!("{} must be a string, found {}", TAG, other)))
        }
        None => return Err(Error::Format(format!("descriptor without {}", TAG))),
    };
    Ok(Some((tag, descriptor, children)))
}

fn string_entry<'v>(descriptor: &'v Map<String, Value>, key: &str) -> Result<&'v str, Error> {
    match descriptor.get(key) {
        Some(Value::String(value)) => Ok(value),
        Some(other) => Err(Error::Format(format!(
            "{} must be a string, found {}",
            key, other
        ))),
        None => Err(Error::Format(format!("missing {}", key))),
    }
}

fn leaf_data<'v>(
    tag: &str,
    descriptor: &'v Map<String, Value>,
    children: &[Value],
) -> Result<&'v str, Error> {
    if !children.is_empty() {
        return Err(Error::Format(format!("{} cannot have children", tag)));
    }
    string_entry(descriptor, DATA)
}

fn node_events(value: &Value, events: &mut Vec<Event>) -> Result<(), Error> {
    let (tag, descriptor, children) = match split(value)? {
        Some(split) => split,
        None => {
            if let Value::String(text) = value {
                events.push(Event::Text(text.clone()));
            }
            return Ok(());
        }
    };
    match tag {
        COMMENT => {
            let data = leaf_data(tag, descriptor, children)?;
            events.push(Event::Comment(data.to_string()));
        }
        PROCESSING_INSTRUCTION => {
            let data = leaf_data(tag, descriptor, children)?;
            let target = string_entry(descriptor, TARGET)?;
            events.push(Event::ProcessingInstruction {
                target: target.to_string(),
                data: data.to_string(),
            });
        }
        CDATA => {
            let data = leaf_data(tag, descriptor, children)?;
            events.push(Event::CData(data.to_string()));
        }
        DOCUMENT => {
            return Err(Error::Format("a document can only be at the top".into()));
        }
        _ if tag.starts_with('#') => {
            return Err(Error::Format(format!("unknown tag {}", tag)));
        }
        _ => {
            let namespace = match descriptor.get(NAMESPACE) {
                None => None,
                Some(Value::String(namespace)) => Some(namespace.clone()),
                Some(other) => {
                    return Err(Error::Format(format!(
                        "{} must be a string, found {}",
                        NAMESPACE, other
                    )))
                }
            };
            let mut attributes = Vec::new();
            // other reserved keys are ignored
            for (name, value) in descriptor.iter().filter(|(name, _)| !name.starts_with('#')) {
                match value {
                    Value::String(value) => attributes.push((name.clone(), value.clone())),
                    other => {
                        return Err(Error::Format(format!(
                            "attribute {} must be a string, found {}",
                            name, other
                        )))
                    }
                }
            }
            events.push(Event::StartElement {
                name: tag.to_string(),
                namespace,
                attributes,
            });
            for child in children {
                node_events(child, events)?;
            }
            events.push(Event::EndElement);
        }
    }
    Ok(())
}
