use crate::domdata::{Dom, Node};
use crate::error::Error;

/// Node construction as used by [`Builder`](crate::Builder) and
/// [`Loader`](crate::Loader).
///
/// The builder only ever creates nodes and appends them, so any tree
/// implementation that can do that can be driven from markup or from the
/// JSON encoding. [`Dom`] is the implementation that ships with this crate.
pub trait DocumentFactory {
    /// Handle to a node in the factory's tree.
    type Handle: Copy;

    /// Create a new, empty document.
    fn create_document(&mut self) -> Self::Handle;

    /// Create an unattached element owned by `document`.
    fn create_element(
        &mut self,
        document: Self::Handle,
        name: &str,
        namespace: Option<&str>,
        attributes: &[(String, String)],
    ) -> Result<Self::Handle, Error>;

    /// Create an unattached text node owned by `document`.
    fn create_text_node(&mut self, document: Self::Handle, text: &str)
        -> Result<Self::Handle, Error>;

    /// Create an unattached comment owned by `document`.
    fn create_comment(&mut self, document: Self::Handle, text: &str)
        -> Result<Self::Handle, Error>;

    /// Create an unattached processing instruction owned by `document`.
    fn create_processing_instruction(
        &mut self,
        document: Self::Handle,
        target: &str,
        data: &str,
    ) -> Result<Self::Handle, Error>;

    /// Create an unattached CDATA section owned by `document`.
    fn create_cdata_section(
        &mut self,
        document: Self::Handle,
        text: &str,
    ) -> Result<Self::Handle, Error>;

    /// Append `child` as the last child of `parent`.
    fn append_child(&mut self, parent: Self::Handle, child: Self::Handle) -> Result<(), Error>;
}

impl DocumentFactory for Dom {
    type Handle = Node;

    fn create_document(&mut self) -> Node {
        self.new_document()
    }

    fn create_element(
        &mut self,
        document: Node,
        name: &str,
        namespace: Option<&str>,
        attributes: &[(String, String)],
    ) -> Result<Node, Error> {
        let node = match namespace {
            Some(namespace) => self.create_element_ns(document, name, namespace)?,
            None => Dom::create_element(self, document, name)?,
        };
        let element = self.element_mut(node).ok_or(Error::NotElement(node))?;
        for (name, value) in attributes {
            element.set_attribute(name.as_str(), value.as_str());
        }
        Ok(node)
    }

    fn create_text_node(&mut self, document: Node, text: &str) -> Result<Node, Error> {
        Dom::create_text_node(self, document, text)
    }

    fn create_comment(&mut self, document: Node, text: &str) -> Result<Node, Error> {
        Dom::create_comment(self, document, text)
    }

    fn create_processing_instruction(
        &mut self,
        document: Node,
        target: &str,
        data: &str,
    ) -> Result<Node, Error> {
        Dom::create_processing_instruction(self, document, target, data)
    }

    fn create_cdata_section(&mut self, document: Node, text: &str) -> Result<Node, Error> {
        Dom::create_cdata_section(self, document, text)
    }

    fn append_child(&mut self, parent: Node, child: Node) -> Result<(), Error> {
        Dom::append_child(self, parent, child)
    }
}
