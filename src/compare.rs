use crate::domdata::{Dom, Node};

/// ## Comparison
impl Dom {
    /// Compare two nodes for structural equality.
    ///
    /// Nodes are equal when they have the same kind and value (name,
    /// namespace, attribute names and values, character data) and their
    /// children are equal, pairwise and in order. Attribute order and node
    /// identity are not taken into account, and the nodes may live in
    /// different documents.
    ///
    /// ```rust
    /// let mut dom = domtree::Dom::new();
    /// let doc1 = dom.parse_string(r#"<a x="1" y="2">text</a>"#)?;
    /// let doc2 = dom.parse_string(r#"<a y="2" x="1">text</a>"#)?;
    /// assert!(dom.compare(doc1, doc2));
    /// # Ok::<(), domtree::Error>(())
    /// ```
    pub fn compare(&self, a: Node, b: Node) -> bool {
        if self.value(a) != self.value(b) {
            return false;
        }
        let mut a_children = self.children(a);
        let mut b_children = self.children(b);
        loop {
            match (a_children.next(), b_children.next()) {
                (Some(a_child), Some(b_child)) => {
                    if !self.compare(a_child, b_child) {
                        return false;
                    }
                }
                (None, None) => return true,
                _ => return false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_ignores_identity() {
        let mut dom = Dom::new();
        let doc = dom.parse_string("<a><b/><!--c--></a>").unwrap();
        let copy = dom.clone_node(doc, true).unwrap();
        assert_ne!(doc, copy);
        assert!(dom.compare(doc, copy));
    }

    #[test]
    fn test_compare_child_count() {
        let mut dom = Dom::new();
        let doc1 = dom.parse_string("<a><b/></a>").unwrap();
        let doc2 = dom.parse_string("<a><b/><b/></a>").unwrap();
        assert!(!dom.compare(doc1, doc2));
        assert!(!dom.compare(doc2, doc1));
    }

    #[test]
    fn test_compare_kind() {
        let mut dom = Dom::new();
        let doc1 = dom.parse_string("<a><![CDATA[x]]></a>").unwrap();
        let doc2 = dom.parse_string("<a>x</a>").unwrap();
        assert!(!dom.compare(doc1, doc2));
    }
}
