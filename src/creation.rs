use crate::domdata::{Dom, Entry, Node};
use crate::error::Error;
use crate::xmlvalue::{
    Attribute, CData, Comment, Element, ProcessingInstruction, Text, Value, ValueType,
};

/// ## Creation
///
/// Nodes are created unattached, owned by a document. Attach them with
/// [`Dom::append_child`] or [`Dom::insert_before`].
impl Dom {
    pub(crate) fn new_node(&mut self, value: Value, document: Option<Node>) -> Node {
        Node::new(self.arena.new_node(Entry { value, document }))
    }

    fn document_check(&self, document: Node) -> Result<(), Error> {
        if self.value_type(document) != ValueType::Document {
            return Err(Error::NotDocument(document));
        }
        Ok(())
    }

    /// Create a new, empty document node.
    pub fn new_document(&mut self) -> Node {
        self.new_node(Value::Document, None)
    }

    /// Create an element owned by `document`.
    ///
    /// ```rust
    /// let mut dom = domtree::Dom::new();
    /// let doc = dom.new_document();
    /// let p = dom.create_element(doc, "p")?;
    /// dom.append_child(doc, p)?;
    /// assert_eq!(dom.to_string(doc), "<p/>");
    /// # Ok::<(), domtree::Error>(())
    /// ```
    pub fn create_element(&mut self, document: Node, name: &str) -> Result<Node, Error> {
        self.document_check(document)?;
        let element = Value::Element(Element::new(name.to_string(), None));
        Ok(self.new_node(element, Some(document)))
    }

    /// Create an element in a namespace, owned by `document`.
    pub fn create_element_ns(
        &mut self,
        document: Node,
        name: &str,
        namespace: &str,
    ) -> Result<Node, Error> {
        self.document_check(document)?;
        let element = Value::Element(Element::new(
            name.to_string(),
            Some(namespace.to_string()),
        ));
        Ok(self.new_node(element, Some(document)))
    }

    /// Create a text node owned by `document`.
    pub fn create_text_node(&mut self, document: Node, text: &str) -> Result<Node, Error> {
        self.document_check(document)?;
        let text = Value::Text(Text::new(text.to_string()));
        Ok(self.new_node(text, Some(document)))
    }

    /// Create a comment owned by `document`.
    pub fn create_comment(&mut self, document: Node, comment: &str) -> Result<Node, Error> {
        self.document_check(document)?;
        let comment = Value::Comment(Comment::new(comment.to_string()));
        Ok(self.new_node(comment, Some(document)))
    }

    /// Create a processing instruction owned by `document`.
    pub fn create_processing_instruction(
        &mut self,
        document: Node,
        target: &str,
        data: &str,
    ) -> Result<Node, Error> {
        self.document_check(document)?;
        let pi = Value::ProcessingInstruction(ProcessingInstruction::new(
            target.to_string(),
            data.to_string(),
        ));
        Ok(self.new_node(pi, Some(document)))
    }

    /// Create a CDATA section owned by `document`.
    pub fn create_cdata_section(&mut self, document: Node, text: &str) -> Result<Node, Error> {
        self.document_check(document)?;
        let cdata = Value::CData(CData::new(text.to_string()));
        Ok(self.new_node(cdata, Some(document)))
    }

    /// Create a free-standing attribute owned by `document`.
    ///
    /// Attributes are not children; put it on an element with
    /// [`Dom::set_attribute_node`].
    pub fn create_attribute(
        &mut self,
        document: Node,
        name: &str,
        value: &str,
    ) -> Result<Node, Error> {
        self.document_check(document)?;
        let attribute = Value::Attribute(Attribute::new(name.to_string(), value.to_string()));
        Ok(self.new_node(attribute, Some(document)))
    }
}
