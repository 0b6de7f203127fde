use crate::domdata::{Dom, Node};
use crate::xmlvalue::{
    Attribute, CData, Comment, Element, ProcessingInstruction, Text, Value, ValueType,
};

/// Obtain node values and their types.
///
/// These are handy if you only need to match against a single value or know
/// the value type already. If you want to handle all value types, use a
/// `match` statement on [`Value`](crate::Value) instead.
impl Dom {
    /// Access to the value for this node.
    ///
    /// ```rust
    /// use domtree::{Dom, Value};
    ///
    /// let mut dom = Dom::new();
    ///
    /// let doc = dom.parse_string("<doc>Example</doc>").unwrap();
    /// let root = dom.document_element(doc).unwrap();
    ///
    /// match dom.value(root) {
    ///    Value::Element(element) => {
    ///       assert_eq!(element.name(), "doc");
    ///   }
    ///   _ => { }
    /// }
    /// ```
    #[inline]
    pub fn value(&self, node: Node) -> &Value {
        &self.entry(node).value
    }

    /// Mutable access to the value for this node.
    #[inline]
    pub fn value_mut(&mut self, node: Node) -> &mut Value {
        &mut self.arena[node.get()].get_mut().value
    }

    /// Get the [`ValueType`](crate::ValueType) of a node.
    pub fn value_type(&self, node: Node) -> ValueType {
        self.value(node).value_type()
    }

    /// Return true if node is a document node.
    pub fn is_document(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Document
    }

    /// Return true if node is an element.
    pub fn is_element(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Element
    }

    /// Return true if node is text.
    pub fn is_text(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Text
    }

    /// Return true if node is a comment.
    pub fn is_comment(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Comment
    }

    /// Return true if node is a processing instruction.
    pub fn is_processing_instruction(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::ProcessingInstruction
    }

    /// Return true if node is a CDATA section.
    pub fn is_cdata(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::CData
    }

    /// If this node's value is text, return a reference to it.
    pub fn text(&self, node: Node) -> Option<&Text> {
        if let Value::Text(text) = self.value(node) {
            Some(text)
        } else {
            None
        }
    }

    /// If this node's value is text, return a reference to the string.
    pub fn text_str(&self, node: Node) -> Option<&str> {
        self.text(node).map(|n| n.get())
    }

    /// If this node's value is a text, return a mutable reference to it.
    pub fn text_mut(&mut self, node: Node) -> Option<&mut Text> {
        if let Value::Text(text) = self.value_mut(node) {
            Some(text)
        } else {
            None
        }
    }

    /// If this node's value is an element, return a reference to it.
    pub fn element(&self, node: Node) -> Option<&Element> {
        if let Value::Element(element) = self.value(node) {
            Some(element)
        } else {
            None
        }
    }

    /// If this node's value is an element, return a mutable reference to it.
    pub fn element_mut(&mut self, node: Node) -> Option<&mut Element> {
        if let Value::Element(element) = self.value_mut(node) {
            Some(element)
        } else {
            None
        }
    }

    /// If this node is an element, return its name.
    pub fn element_name(&self, node: Node) -> Option<&str> {
        self.element(node).map(|element| element.name())
    }

    /// If this node's value is a comment, return a reference to it.
    pub fn comment(&self, node: Node) -> Option<&Comment> {
        if let Value::Comment(comment) = self.value(node) {
            Some(comment)
        } else {
            None
        }
    }

    /// If this node's value is a comment, return a reference to the string.
    pub fn comment_str(&self, node: Node) -> Option<&str> {
        self.comment(node).map(|n| n.get())
    }

    /// If this node's value is a comment, return a mutable reference to it.
    pub fn comment_mut(&mut self, node: Node) -> Option<&mut Comment> {
        if let Value::Comment(comment) = self.value_mut(node) {
            Some(comment)
        } else {
            None
        }
    }

    /// If this node's value is a processing instruction, return a reference to it.
    pub fn processing_instruction(&self, node: Node) -> Option<&ProcessingInstruction> {
        if let Value::ProcessingInstruction(pi) = self.value(node) {
            Some(pi)
        } else {
            None
        }
    }

    /// If this node's value is a processing instruction, return a mutable reference to it.
    pub fn processing_instruction_mut(&mut self, node: Node) -> Option<&mut ProcessingInstruction> {
        if let Value::ProcessingInstruction(pi) = self.value_mut(node) {
            Some(pi)
        } else {
            None
        }
    }

    /// If this node's value is a CDATA section, return a reference to it.
    pub fn cdata(&self, node: Node) -> Option<&CData> {
        if let Value::CData(cdata) = self.value(node) {
            Some(cdata)
        } else {
            None
        }
    }

    /// If this node's value is a CDATA section, return a reference to the string.
    pub fn cdata_str(&self, node: Node) -> Option<&str> {
        self.cdata(node).map(|n| n.get())
    }

    /// If this node's value is a CDATA section, return a mutable reference to it.
    pub fn cdata_mut(&mut self, node: Node) -> Option<&mut CData> {
        if let Value::CData(cdata) = self.value_mut(node) {
            Some(cdata)
        } else {
            None
        }
    }

    /// If this node is a free-standing attribute, return a reference to it.
    pub fn attribute(&self, node: Node) -> Option<&Attribute> {
        if let Value::Attribute(attribute) = self.value(node) {
            Some(attribute)
        } else {
            None
        }
    }
}
