use indextree::NodeEdge as IndexTreeNodeEdge;

use crate::domdata::{Dom, Node};
use crate::error::Error;
use crate::xmlvalue::{Value, ValueType};

/// Node edges.
///
/// Used by [`Dom::traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeEdge {
    /// The start edge of a node. In case of an element
    /// this is the start tag. In case of a document
    /// the start of the document.
    Start(Node),
    /// The end edge of a node. In case of an element
    /// this is the end tag. In case of a document the end
    /// of the document. For any other values, the
    /// end edge occurs immediately after the start
    /// edge.
    End(Node),
}

/// ## Read-only access
impl Dom {
    /// Obtain the document element from a document node.
    ///
    /// Returns [`Error::NotDocument`] if this is not a document node, and
    /// [`Error::NoDocumentElement`] if no element has been added yet.
    ///
    /// ```rust
    /// let mut dom = domtree::Dom::new();
    ///
    /// let doc = dom.parse_string("<p>Example</p>").unwrap();
    ///
    /// let doc_el = dom.document_element(doc).unwrap();
    /// assert_eq!(dom.element_name(doc_el), Some("p"));
    /// ```
    pub fn document_element(&self, node: Node) -> Result<Node, Error> {
        if self.value_type(node) != ValueType::Document {
            return Err(Error::NotDocument(node));
        }
        self.children(node)
            .find(|child| matches!(self.value(*child), Value::Element(_)))
            .ok_or(Error::NoDocumentElement(node))
    }

    /// The document that owns this node.
    ///
    /// Returns [`None`] for document nodes.
    pub fn owner_document(&self, node: Node) -> Option<Node> {
        self.entry(node).document
    }

    /// The document a node lives in: its owner, or the node itself if it's
    /// a document.
    pub(crate) fn document_of(&self, node: Node) -> Node {
        self.owner_document(node).unwrap_or(node)
    }

    /// Get parent node.
    ///
    /// Returns [`None`] if this is a document node or if the node is
    /// unattached.
    ///
    /// ```rust
    /// let mut dom = domtree::Dom::new();
    /// let doc = dom.parse_string("<p>Example</p>").unwrap();
    /// let p = dom.document_element(doc).unwrap();
    /// let text = dom.first_child(p).unwrap();
    /// assert_eq!(dom.parent(text), Some(p));
    /// assert_eq!(dom.parent(p), Some(doc));
    /// assert_eq!(dom.parent(doc), None);
    /// ```
    pub fn parent(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].parent().map(Node::new)
    }

    /// Get first child.
    ///
    /// Returns [`None`] if there are no children.
    pub fn first_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].first_child().map(Node::new)
    }

    /// Get last child.
    ///
    /// Returns [`None`] if there are no children.
    pub fn last_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].last_child().map(Node::new)
    }

    /// Get next sibling.
    ///
    /// Returns [`None`] if there is no next sibling.
    ///
    /// ```rust
    /// let mut dom = domtree::Dom::new();
    /// let doc = dom.parse_string("<p><a/><b/></p>").unwrap();
    /// let p = dom.document_element(doc).unwrap();
    /// let a = dom.first_child(p).unwrap();
    /// let b = dom.next_sibling(a).unwrap();
    /// assert_eq!(dom.next_sibling(b), None);
    /// ```
    pub fn next_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].next_sibling().map(Node::new)
    }

    /// Get previous sibling.
    ///
    /// Returns [`None`] if there is no previous sibling.
    pub fn previous_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].previous_sibling().map(Node::new)
    }

    /// Iterator over ancestor nodes, including this one.
    ///
    /// ```rust
    /// let mut dom = domtree::Dom::new();
    ///
    /// let doc = dom.parse_string("<a><b><c/></b></a>").unwrap();
    /// let a = dom.document_element(doc).unwrap();
    /// let b = dom.first_child(a).unwrap();
    /// let c = dom.first_child(b).unwrap();
    ///
    /// let ancestors = dom.ancestors(c).collect::<Vec<_>>();
    /// assert_eq!(ancestors, vec![c, b, a, doc]);
    /// ```
    pub fn ancestors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().ancestors(self.arena()).map(Node::new)
    }

    /// Iterator over the child nodes of this node, in order.
    pub fn children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().children(self.arena()).map(Node::new)
    }

    /// Get index of child.
    ///
    /// Returns [`None`] if the node is not a child of this node.
    ///
    /// ```rust
    /// let mut dom = domtree::Dom::new();
    /// let doc = dom.parse_string("<p><a/><b/></p>").unwrap();
    /// let p = dom.document_element(doc).unwrap();
    /// let a = dom.first_child(p).unwrap();
    /// let b = dom.next_sibling(a).unwrap();
    /// assert_eq!(dom.child_index(p, a), Some(0));
    /// assert_eq!(dom.child_index(p, b), Some(1));
    /// assert_eq!(dom.child_index(a, b), None);
    /// ```
    pub fn child_index(&self, parent: Node, child: Node) -> Option<usize> {
        if self.parent(child) != Some(parent) {
            return None;
        }
        self.children(parent).position(|n| n == child)
    }

    /// Iterator over the descendants of this node, including this one. In
    /// document order (pre-order depth-first).
    pub fn descendants(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().descendants(self.arena()).map(Node::new)
    }

    /// Traverse over node edges.
    ///
    /// For the tree `<a><b/></a>` this generates a [`NodeEdge::Start`] for
    /// `<a>`, then a [`NodeEdge::Start`] for `<b>`, immediately followed by a
    /// [`NodeEdge::End`] for `<b>`, and finally a [`NodeEdge::End`] for `<a>`.
    ///
    /// ```rust
    /// let mut dom = domtree::Dom::new();
    /// let doc = dom.parse_string("<a><b>Text</b></a>").unwrap();
    /// let a = dom.document_element(doc).unwrap();
    /// let b = dom.first_child(a).unwrap();
    /// let text = dom.first_child(b).unwrap();
    /// let edges = dom.traverse(a).collect::<Vec<_>>();
    /// assert_eq!(edges, vec![
    ///  domtree::NodeEdge::Start(a),
    ///  domtree::NodeEdge::Start(b),
    ///  domtree::NodeEdge::Start(text),
    ///  domtree::NodeEdge::End(text),
    ///  domtree::NodeEdge::End(b),
    ///  domtree::NodeEdge::End(a),
    /// ]);
    /// ```
    pub fn traverse(&self, node: Node) -> impl Iterator<Item = NodeEdge> + '_ {
        node.get().traverse(self.arena()).map(|edge| match edge {
            IndexTreeNodeEdge::Start(node_id) => NodeEdge::Start(Node::new(node_id)),
            IndexTreeNodeEdge::End(node_id) => NodeEdge::End(Node::new(node_id)),
        })
    }
}
