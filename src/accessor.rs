//! Index and selector access to children and attributes.
//!
//! A [`Query`] is a [`Selector`] that picks children (or an attribute) plus
//! a [`Position`] that narrows the picked children. Queries can be written
//! as strings:
//!
//! | expression   | result                                         |
//! |--------------|------------------------------------------------|
//! | `2`, `-1`    | a single child, counting all children           |
//! | `*`          | all element children                           |
//! | `p`          | all `p` element children                       |
//! | `#text`      | all text children (`#comment`, `#pi`, `#cdata`) |
//! | `@id`        | the value of attribute `id`                    |
//! | `p:0`        | the first `p` child                            |
//! | `p:1:3`      | the second and third `p` children              |
//! | `*::2`       | every other element child                      |
//!
//! ```rust
//! use domtree::{Dom, Selection};
//!
//! let mut dom = Dom::new();
//! let doc = dom.parse_string(r#"<ul id="list"><li>a</li><li>b</li><li>c</li></ul>"#)?;
//! let ul = dom.document_element(doc)?;
//!
//! let items = dom.select(ul, "li")?.nodes().unwrap().to_vec();
//! assert_eq!(items.len(), 3);
//! assert_eq!(dom.select(ul, "li:-1")?, Selection::Node(items[2]));
//! assert_eq!(dom.select(ul, "li:1:")?, Selection::Nodes(items[1..].to_vec()));
//! assert_eq!(dom.select(ul, "@id")?, Selection::Attribute("list"));
//! # Ok::<(), domtree::Error>(())
//! ```

use std::str::FromStr;

use crate::domdata::{Dom, Node};
use crate::error::Error;
use crate::xmlvalue::ValueType;

/// Chooses children by kind or name, or an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// All children, of any kind.
    Any,
    /// All element children (`*`).
    Elements,
    /// Element children with this name.
    Name(String),
    /// Children of a kind (`#text`, `#comment`, `#pi`, `#cdata`).
    Kind(ValueType),
    /// An attribute of the node itself (`@name`).
    Attribute(String),
}

/// Narrows the children picked by a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// The whole sequence.
    All,
    /// One entry. Negative values count from the end.
    Index(isize),
    /// A slice with the usual start, stop and step semantics. Negative
    /// bounds count from the end; missing bounds cover the whole sequence.
    Slice {
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
    },
}

/// A selector and a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub selector: Selector,
    pub position: Position,
}

/// The result of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<'a> {
    /// A single node, picked by index.
    Node(Node),
    /// An ordered sequence of nodes, possibly empty.
    Nodes(Vec<Node>),
    /// An attribute value.
    Attribute(&'a str),
}

impl<'a> Selection<'a> {
    /// The node, if this is a single node.
    pub fn node(&self) -> Option<Node> {
        match self {
            Selection::Node(node) => Some(*node),
            _ => None,
        }
    }

    /// The nodes, if this is a sequence.
    pub fn nodes(&self) -> Option<&[Node]> {
        match self {
            Selection::Nodes(nodes) => Some(nodes.as_slice()),
            _ => None,
        }
    }

    /// The attribute value, if this is an attribute.
    pub fn attribute(&self) -> Option<&'a str> {
        match self {
            Selection::Attribute(value) => Some(*value),
            _ => None,
        }
    }
}

impl Selector {
    fn matches(&self, dom: &Dom, node: Node) -> bool {
        match self {
            Selector::Any => true,
            Selector::Elements => dom.is_element(node),
            Selector::Name(name) => dom.element_name(node) == Some(name.as_str()),
            Selector::Kind(value_type) => dom.value_type(node) == *value_type,
            Selector::Attribute(_) => false,
        }
    }
}

impl FromStr for Selector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let selector = match s {
            "" => Selector::Any,
            "*" => Selector::Elements,
            "#text" => Selector::Kind(ValueType::Text),
            "#comment" => Selector::Kind(ValueType::Comment),
            "#pi" => Selector::Kind(ValueType::ProcessingInstruction),
            "#cdata" => Selector::Kind(ValueType::CData),
            _ => {
                if let Some(name) = s.strip_prefix('@') {
                    if !is_qualified_name(name) {
                        return Err(Error::InvalidSelector(s.to_string()));
                    }
                    Selector::Attribute(name.to_string())
                } else if is_qualified_name(s) {
                    Selector::Name(s.to_string())
                } else {
                    return Err(Error::InvalidSelector(s.to_string()));
                }
            }
        };
        Ok(selector)
    }
}

// `local` or `prefix:local`
fn is_qualified_name(name: &str) -> bool {
    let mut parts = name.split(':');
    let valid = parts.by_ref().take(2).all(|part| {
        match part.chars().next() {
            Some(first) => {
                !(first.is_ascii_digit() || matches!(first, '-' | '.' | '#' | '@'))
                    && !part.chars().any(char::is_whitespace)
            }
            None => false,
        }
    });
    valid && parts.next().is_none()
}

fn is_position_part(part: &str) -> bool {
    part.is_empty() || part.parse::<isize>().is_ok()
}

fn parse_bound(part: &str, expr: &str) -> Result<Option<isize>, Error> {
    if part.is_empty() {
        return Ok(None);
    }
    part.parse::<isize>()
        .map(Some)
        .map_err(|_| Error::InvalidSelector(expr.to_string()))
}

impl FromStr for Query {
    type Err = Error;

    /// Parse `selector[:index]` or `selector:start:stop[:step]`.
    ///
    /// Element names may contain `:` themselves, so the position is the
    /// trailing run of parts that are integers or empty.
    fn from_str(expr: &str) -> Result<Self, Error> {
        let parts = expr.split(':').collect::<Vec<_>>();
        let position_len = parts
            .iter()
            .skip(1)
            .rev()
            .take_while(|part| is_position_part(part))
            .count();
        // a bare integer indexes all children
        let position_len = if position_len == parts.len() - 1 && is_position_part(parts[0]) {
            if parts[0].is_empty() && parts.len() == 1 {
                0
            } else {
                parts.len()
            }
        } else {
            position_len
        };
        if position_len > 3 {
            return Err(Error::InvalidSelector(expr.to_string()));
        }
        let selector_len = parts.len() - position_len;
        let selector = parts[..selector_len].join(":").parse::<Selector>()?;
        let position = match &parts[selector_len..] {
            [] => Position::All,
            [index] => match parse_bound(index, expr)? {
                Some(index) => Position::Index(index),
                None => Position::All,
            },
            [start, stop] => Position::Slice {
                start: parse_bound(start, expr)?,
                stop: parse_bound(stop, expr)?,
                step: None,
            },
            [start, stop, step] => Position::Slice {
                start: parse_bound(start, expr)?,
                stop: parse_bound(stop, expr)?,
                step: parse_bound(step, expr)?,
            },
            _ => return Err(Error::InvalidSelector(expr.to_string())),
        };
        Ok(Query { selector, position })
    }
}

impl Query {
    /// A query for the whole sequence matched by `selector`.
    pub fn new(selector: Selector) -> Self {
        Query {
            selector,
            position: Position::All,
        }
    }

    /// Narrow to a single entry.
    pub fn index(self, index: isize) -> Self {
        Query {
            position: Position::Index(index),
            ..self
        }
    }

    /// Narrow to a slice.
    pub fn slice(self, start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Query {
            position: Position::Slice { start, stop, step },
            ..self
        }
    }
}

fn resolve_index(index: isize, len: usize) -> Result<usize, Error> {
    let resolved = if index < 0 {
        index + len as isize
    } else {
        index
    };
    if resolved < 0 || resolved >= len as isize {
        return Err(Error::IndexOutOfRange { index, len });
    }
    Ok(resolved as usize)
}

fn clamp_bound(bound: isize, len: usize) -> usize {
    if bound < 0 {
        (bound + len as isize).max(0) as usize
    } else {
        (bound as usize).min(len)
    }
}

fn slice_nodes(
    nodes: &[Node],
    start: Option<isize>,
    stop: Option<isize>,
    step: Option<isize>,
) -> Result<Vec<Node>, Error> {
    let step = step.unwrap_or(1);
    if step <= 0 {
        return Err(Error::UnsupportedSelector(format!(
            "slice step must be positive, got {}",
            step
        )));
    }
    let len = nodes.len();
    let start = start.map_or(0, |start| clamp_bound(start, len));
    let stop = stop.map_or(len, |stop| clamp_bound(stop, len));
    Ok((start..stop)
        .step_by(step as usize)
        .map(|index| nodes[index])
        .collect())
}

/// ## Selection
///
/// The accessor never changes the tree.
impl Dom {
    /// Evaluate a query expression against a node.
    ///
    /// See the [`accessor`](crate::accessor) module for the syntax.
    pub fn select(&self, node: Node, expr: &str) -> Result<Selection<'_>, Error> {
        let query = expr.parse::<Query>()?;
        self.query(node, &query)
    }

    /// Evaluate a query against a node.
    ///
    /// A selector that matches nothing gives an empty sequence. A single
    /// index outside the matches is [`Error::IndexOutOfRange`]. Attributes
    /// can't be indexed or sliced ([`Error::AttributeNotIndexable`]), and a
    /// missing attribute is [`Error::AttributeNotFound`].
    pub fn query(&self, node: Node, query: &Query) -> Result<Selection<'_>, Error> {
        if let Selector::Attribute(name) = &query.selector {
            if query.position != Position::All {
                return Err(Error::AttributeNotIndexable(name.clone()));
            }
            return Ok(Selection::Attribute(self.get_attribute(node, name)?));
        }
        let matches = self.filter(node, &query.selector)?;
        match query.position {
            Position::All => Ok(Selection::Nodes(matches)),
            Position::Index(index) => {
                let index = resolve_index(index, matches.len())?;
                Ok(Selection::Node(matches[index]))
            }
            Position::Slice { start, stop, step } => {
                Ok(Selection::Nodes(slice_nodes(&matches, start, stop, step)?))
            }
        }
    }

    /// The children of `node` matched by `selector`, in document order.
    pub fn filter(&self, node: Node, selector: &Selector) -> Result<Vec<Node>, Error> {
        if let Selector::Attribute(name) = selector {
            return Err(Error::AttributeNotIndexable(name.clone()));
        }
        Ok(self
            .children(node)
            .filter(|child| selector.matches(self, *child))
            .collect())
    }

    /// The position of `child` among the children of `node` matched by
    /// `selector`.
    ///
    /// Returns [`None`] if `child` isn't one of them.
    pub fn position(
        &self,
        node: Node,
        selector: &Selector,
        child: Node,
    ) -> Result<Option<usize>, Error> {
        Ok(self
            .filter(node, selector)?
            .into_iter()
            .position(|matched| matched == child))
    }
}
