use std::borrow::Cow;
use std::fmt::Write as _;
use std::io;

use crate::access::NodeEdge;
use crate::domdata::{Dom, Node};
use crate::entity::{serialize_attribute, serialize_text};
use crate::error::Error;
use crate::xmlvalue::Value;

/// ## Markup serialization
///
/// Writes the tree back out as markup. Only tree content is reproduced:
/// original formatting inside tags is not kept, and namespace declarations
/// are only written where they exist as `xmlns` attributes.
impl Dom {
    /// Serialize a node and its descendants to a markup string.
    ///
    /// ```rust
    /// let mut dom = domtree::Dom::new();
    /// let doc = dom.parse_string(r#"<a   x='1'>A &amp; B<b></b></a>"#)?;
    /// assert_eq!(dom.to_string(doc), r#"<a x="1">A &amp; B<b/></a>"#);
    /// # Ok::<(), domtree::Error>(())
    /// ```
    pub fn to_string(&self, node: Node) -> String {
        let mut out = String::new();
        for edge in self.traverse(node) {
            match edge {
                NodeEdge::Start(node) => self.edge_start(node, &mut out),
                NodeEdge::End(node) => self.edge_end(node, &mut out),
            }
        }
        out
    }

    /// Serialize a node and its descendants to a writer.
    pub fn write(&self, node: Node, w: &mut impl io::Write) -> Result<(), Error> {
        w.write_all(self.to_string(node).as_bytes())?;
        Ok(())
    }

    // writing into a String cannot fail, so the fmt results are dropped
    fn edge_start(&self, node: Node, out: &mut String) {
        match self.value(node) {
            Value::Document => {}
            Value::Element(element) => {
                let _ = write!(out, "<{}", element.name());
                for (name, value) in element.attributes() {
                    let _ = write!(
                        out,
                        " {}=\"{}\"",
                        name,
                        serialize_attribute(Cow::Borrowed(value))
                    );
                }
                if self.first_child(node).is_none() {
                    out.push_str("/>");
                } else {
                    out.push('>');
                }
            }
            Value::Text(text) => {
                out.push_str(&serialize_text(Cow::Borrowed(text.get())));
            }
            Value::Comment(comment) => {
                let _ = write!(out, "<!--{}-->", comment.get());
            }
            Value::ProcessingInstruction(pi) => {
                if pi.data().is_empty() {
                    let _ = write!(out, "<?{}?>", pi.target());
                } else {
                    let _ = write!(out, "<?{} {}?>", pi.target(), pi.data());
                }
            }
            Value::CData(cdata) => {
                let _ = write!(out, "<![CDATA[{}]]>", cdata.get());
            }
            Value::Attribute(attribute) => {
                let _ = write!(
                    out,
                    "{}=\"{}\"",
                    attribute.name(),
                    serialize_attribute(Cow::Borrowed(attribute.value()))
                );
            }
        }
    }

    fn edge_end(&self, node: Node, out: &mut String) {
        if let Value::Element(element) = self.value(node) {
            if self.first_child(node).is_some() {
                let _ = write!(out, "</{}>", element.name());
            }
        }
    }
}
