use std::fmt;

use crate::domdata::Node;

/// The broad category of an [`Error`].
///
/// Use [`Error::kind`] to obtain it when you only care about the class of
/// failure and not the details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unbalanced builder events, hierarchy violations, cycles.
    Structure,
    /// A missing child or attribute.
    NotFound,
    /// A node from another document was used without importing it.
    CrossDocument,
    /// JSON that does not have the shape of an encoded tree.
    Format,
    /// Malformed input text (markup or JSON).
    Parse,
    /// An invalid selector combination.
    Type,
    /// A position outside of a selection.
    Index,
    /// Reading input failed.
    Io,
}

#[derive(Debug)]
pub enum Error {
    /// The operation would violate the hierarchy rules of the tree, such as
    /// adding children to a text node or a second element to a document.
    HierarchyRequest(String),
    /// Inserting the node would make it its own ancestor.
    Cycle(Node),
    /// Builder events do not nest properly.
    Unbalanced(String),
    /// The node is not a document node.
    NotDocument(Node),
    /// The node is not an element.
    NotElement(Node),
    /// The node is not a child of the given parent.
    NotAChild(Node),
    /// The document has no document element.
    NoDocumentElement(Node),
    /// No attribute with this name exists.
    AttributeNotFound(String),
    /// The attribute node has already been set on an element.
    AttributeInUse(Node),
    /// The node belongs to another document and has not been imported.
    WrongDocument(Node),
    /// Position outside of the selected sequence.
    IndexOutOfRange { index: isize, len: usize },
    /// An attribute selector was combined with an index or slice.
    AttributeNotIndexable(String),
    /// The selector is well-formed but the combination isn't supported.
    UnsupportedSelector(String),
    /// The selector expression cannot be parsed.
    InvalidSelector(String),
    /// JSON does not have the expected tree shape.
    Format(String),
    /// JSON text could not be parsed.
    Json(serde_json::Error),
    UnclosedEntity(String),
    InvalidEntity(String),
    UnknownPrefix(String),
    DuplicateAttribute(String),
    InvalidCloseTag(String, String),
    UnclosedTag,
    /// Input bytes are not valid in the detected encoding.
    MalformedEncoding(&'static str),
    Io(std::io::Error),
    Parser(xmlparser::Error),
    NodeError(indextree::NodeError),
}

impl Error {
    /// The category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::HierarchyRequest(_)
            | Error::Cycle(_)
            | Error::Unbalanced(_)
            | Error::NotDocument(_)
            | Error::NotElement(_)
            | Error::AttributeInUse(_)
            | Error::NodeError(_) => ErrorKind::Structure,
            Error::NotAChild(_) | Error::NoDocumentElement(_) | Error::AttributeNotFound(_) => {
                ErrorKind::NotFound
            }
            Error::WrongDocument(_) => ErrorKind::CrossDocument,
            Error::IndexOutOfRange { .. } => ErrorKind::Index,
            Error::AttributeNotIndexable(_)
            | Error::UnsupportedSelector(_)
            | Error::InvalidSelector(_) => ErrorKind::Type,
            Error::Format(_) => ErrorKind::Format,
            Error::Json(_)
            | Error::UnclosedEntity(_)
            | Error::InvalidEntity(_)
            | Error::UnknownPrefix(_)
            | Error::DuplicateAttribute(_)
            | Error::InvalidCloseTag(_, _)
            | Error::UnclosedTag
            | Error::MalformedEncoding(_)
            | Error::Parser(_) => ErrorKind::Parse,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::HierarchyRequest(message) => write!(f, "hierarchy request error: {}", message),
            Error::Cycle(node) => write!(f, "node {:?} cannot be inserted below itself", node),
            Error::Unbalanced(message) => write!(f, "unbalanced events: {}", message),
            Error::NotDocument(node) => write!(f, "node {:?} is not a document", node),
            Error::NotElement(node) => write!(f, "node {:?} is not an element", node),
            Error::NotAChild(node) => write!(f, "node {:?} is not a child of this parent", node),
            Error::NoDocumentElement(node) => {
                write!(f, "document {:?} has no document element", node)
            }
            Error::AttributeNotFound(name) => write!(f, "attribute not found: {}", name),
            Error::AttributeInUse(node) => {
                write!(f, "attribute node {:?} is already set on an element", node)
            }
            Error::WrongDocument(node) => {
                write!(f, "node {:?} belongs to another document", node)
            }
            Error::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for {} matches", index, len)
            }
            Error::AttributeNotIndexable(name) => {
                write!(f, "attribute selector @{} cannot be indexed or sliced", name)
            }
            Error::UnsupportedSelector(selector) => {
                write!(f, "unsupported selector: {}", selector)
            }
            Error::InvalidSelector(selector) => write!(f, "invalid selector: {}", selector),
            Error::Format(message) => write!(f, "invalid tree encoding: {}", message),
            Error::Json(e) => write!(f, "JSON error: {}", e),
            Error::UnclosedEntity(entity) => write!(f, "unclosed entity: {}", entity),
            Error::InvalidEntity(entity) => write!(f, "invalid entity: {}", entity),
            Error::UnknownPrefix(prefix) => write!(f, "unknown prefix: {}", prefix),
            Error::DuplicateAttribute(name) => write!(f, "duplicate attribute: {}", name),
            Error::InvalidCloseTag(expected, found) => {
                write!(f, "expected close tag </{}>, found </{}>", expected, found)
            }
            Error::UnclosedTag => write!(f, "unclosed tag at end of input"),
            Error::MalformedEncoding(encoding) => {
                write!(f, "input is not valid {}", encoding)
            }
            Error::Io(e) => write!(f, "IO error: {}", e),
            Error::Parser(e) => write!(f, "parser error: {}", e),
            Error::NodeError(e) => write!(f, "node error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(e) => Some(e),
            Error::Io(e) => Some(e),
            Error::Parser(e) => Some(e),
            Error::NodeError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<xmlparser::Error> for Error {
    #[inline]
    fn from(e: xmlparser::Error) -> Self {
        Error::Parser(e)
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    #[inline]
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl From<indextree::NodeError> for Error {
    #[inline]
    fn from(e: indextree::NodeError) -> Self {
        Error::NodeError(e)
    }
}
