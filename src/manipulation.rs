use crate::domdata::{Dom, Node};
use crate::error::Error;
use crate::xmlvalue::{Value, ValueType};

/// Manipulation of the tree structure.
///
/// This maintains the tree structure:
/// - A document holds at most one element, the document element.
/// - The only other nodes that can exist directly under a document are
///   comments and processing instructions.
/// - You cannot add a node to a node that is not an element or a document.
/// - A node can never become its own ancestor.
/// - Nodes only move within the document that owns them; use
///   [`Dom::import_node`] to bring a node over from another document.
///
/// All checks happen before anything is changed, so a failing operation
/// leaves the tree as it was.
impl Dom {
    /// Append a child to the end of the children of the given parent.
    ///
    /// If the child is attached somewhere else it is moved. It is now the
    /// new last node of the parent.
    pub fn append_child(&mut self, parent: Node, child: Node) -> Result<(), Error> {
        self.add_structure_check(parent, child)?;
        parent.get().checked_append(child.get(), self.arena_mut())?;
        Ok(())
    }

    /// Insert a child before a reference child of `parent`.
    ///
    /// Without a reference node this is the same as [`Dom::append_child`].
    /// Fails with [`Error::NotAChild`] if the reference node is not a child
    /// of `parent`.
    pub fn insert_before(
        &mut self,
        parent: Node,
        child: Node,
        reference: Option<Node>,
    ) -> Result<(), Error> {
        let reference = match reference {
            Some(reference) => reference,
            None => return self.append_child(parent, child),
        };
        if self.parent(reference) != Some(parent) {
            return Err(Error::NotAChild(reference));
        }
        self.add_structure_check(parent, child)?;
        if reference == child {
            return Ok(());
        }
        reference
            .get()
            .checked_insert_before(child.get(), self.arena_mut())?;
        Ok(())
    }

    /// Remove a child from `parent`.
    ///
    /// The node is detached: parent and sibling links are cleared but its
    /// value and descendants stay intact, so it can be inserted again.
    ///
    /// ```rust
    /// let mut dom = domtree::Dom::new();
    /// let doc = dom.parse_string("<p><a/>text</p>")?;
    /// let p = dom.document_element(doc)?;
    /// let a = dom.first_child(p).unwrap();
    /// let removed = dom.remove_child(p, a)?;
    /// assert_eq!(dom.to_string(doc), "<p>text</p>");
    /// dom.append_child(p, removed)?;
    /// assert_eq!(dom.to_string(doc), "<p>text<a/></p>");
    /// # Ok::<(), domtree::Error>(())
    /// ```
    pub fn remove_child(&mut self, parent: Node, child: Node) -> Result<Node, Error> {
        if self.parent(child) != Some(parent) {
            return Err(Error::NotAChild(child));
        }
        child.get().detach(self.arena_mut());
        Ok(child)
    }

    /// Clone a node.
    ///
    /// The clone has a new identity, is unattached and belongs to the same
    /// document. A deep clone copies all descendants; a shallow clone of an
    /// element copies its name, namespace and attributes but no children.
    /// Other node kinds have no children, so shallow and deep clones are the
    /// same for them.
    pub fn clone_node(&mut self, node: Node, deep: bool) -> Result<Node, Error> {
        let document = self.owner_document(node);
        self.clone_into(node, deep, document)
    }

    /// Import a node from another document.
    ///
    /// Returns a clone owned by `document`, which can then be inserted into
    /// it. The original node is left alone.
    pub fn import_node(&mut self, document: Node, node: Node, deep: bool) -> Result<Node, Error> {
        if !self.is_document(document) {
            return Err(Error::NotDocument(document));
        }
        if self.is_document(node) {
            return Err(Error::HierarchyRequest(
                "Cannot import a document node".into(),
            ));
        }
        self.clone_into(node, deep, Some(document))
    }

    fn clone_into(&mut self, node: Node, deep: bool, document: Option<Node>) -> Result<Node, Error> {
        let mut value = self.value(node).clone();
        if let Value::Attribute(attribute) = &mut value {
            attribute.owner_element = None;
        }
        let is_document = matches!(value, Value::Document);
        let copy = self.new_node(value, if is_document { None } else { document });
        if deep {
            // children of a cloned document belong to the new document
            let child_document = if is_document { Some(copy) } else { document };
            let children = self.children(node).collect::<Vec<_>>();
            for child in children {
                let child_copy = self.clone_into(child, true, child_document)?;
                copy.get()
                    .checked_append(child_copy.get(), self.arena_mut())?;
            }
        }
        Ok(copy)
    }

    /// Put a free-standing attribute made with [`Dom::create_attribute`] on
    /// an element.
    ///
    /// An attribute node can be set once; afterwards it records its owner
    /// element and using it again is [`Error::AttributeInUse`]. Clone it to
    /// set the same attribute elsewhere. Returns the value it replaced, if
    /// any.
    ///
    /// ```rust
    /// let mut dom = domtree::Dom::new();
    /// let doc = dom.parse_string("<p/>")?;
    /// let p = dom.document_element(doc)?;
    /// let id = dom.create_attribute(doc, "id", "x")?;
    /// dom.set_attribute_node(p, id)?;
    /// assert_eq!(dom.attribute(id).unwrap().owner_element(), Some(p));
    /// assert!(dom.set_attribute_node(p, id).is_err());
    /// # Ok::<(), domtree::Error>(())
    /// ```
    pub fn set_attribute_node(
        &mut self,
        element: Node,
        attribute: Node,
    ) -> Result<Option<String>, Error> {
        if !self.is_element(element) {
            return Err(Error::NotElement(element));
        }
        let (name, value) = match self.attribute(attribute) {
            Some(free) if free.owner_element.is_some() => {
                return Err(Error::AttributeInUse(attribute))
            }
            Some(free) => (free.name.clone(), free.value.clone()),
            None => {
                return Err(Error::HierarchyRequest(
                    "Only attribute nodes can be set as attributes".into(),
                ))
            }
        };
        if self.document_of(attribute) != self.document_of(element) {
            return Err(Error::WrongDocument(attribute));
        }
        if let Value::Attribute(free) = self.value_mut(attribute) {
            free.owner_element = Some(element);
        }
        let previous = self
            .element_mut(element)
            .and_then(|element| element.set_attribute(name, value));
        Ok(previous)
    }

    /// Set an attribute on an element, returning the previous value.
    pub fn set_attribute(
        &mut self,
        node: Node,
        name: &str,
        value: &str,
    ) -> Result<Option<String>, Error> {
        let element = self.element_mut(node).ok_or(Error::NotElement(node))?;
        Ok(element.set_attribute(name, value))
    }

    /// Get an attribute of an element.
    ///
    /// A missing attribute is [`Error::AttributeNotFound`], never the empty
    /// string.
    pub fn get_attribute(&self, node: Node, name: &str) -> Result<&str, Error> {
        self.element(node)
            .and_then(|element| element.get_attribute(name))
            .ok_or_else(|| Error::AttributeNotFound(name.to_string()))
    }

    /// Remove an attribute from an element, returning its value.
    pub fn remove_attribute(&mut self, node: Node, name: &str) -> Result<String, Error> {
        let element = self.element_mut(node).ok_or(Error::NotElement(node))?;
        element
            .remove_attribute(name)
            .ok_or_else(|| Error::AttributeNotFound(name.to_string()))
    }

    fn add_structure_check(&self, parent: Node, child: Node) -> Result<(), Error> {
        let parent_type = self.value_type(parent);
        if !matches!(parent_type, ValueType::Element | ValueType::Document) {
            return Err(Error::HierarchyRequest(
                "Cannot add children to non-element and non-document node".into(),
            ));
        }
        let child_type = self.value_type(child);
        match child_type {
            ValueType::Document => {
                return Err(Error::HierarchyRequest(
                    "Cannot add a document as a child".into(),
                ));
            }
            ValueType::Attribute => {
                return Err(Error::HierarchyRequest(
                    "Attributes are not children".into(),
                ));
            }
            _ => {}
        }
        if self.document_of(child) != self.document_of(parent) {
            return Err(Error::WrongDocument(child));
        }
        if self.ancestors(parent).any(|ancestor| ancestor == child) {
            return Err(Error::Cycle(child));
        }
        if parent_type == ValueType::Document {
            match child_type {
                ValueType::Element => {
                    let has_other_element = self
                        .children(parent)
                        .any(|existing| existing != child && self.is_element(existing));
                    if has_other_element {
                        return Err(Error::HierarchyRequest(
                            "Cannot add a second element under a document".into(),
                        ));
                    }
                }
                ValueType::Text | ValueType::CData => {
                    return Err(Error::HierarchyRequest(
                        "Cannot add text under a document".into(),
                    ));
                }
                _ => {
                    // comments and processing instructions can exist everywhere
                }
            }
        }
        Ok(())
    }
}
