use indexmap::IndexMap;

use crate::domdata::Node;

/// The type of a node.
///
/// Access it using [`Value::value_type`] or
/// [`Dom::value_type`](crate::Dom::value_type).
///
/// The `ValueType` can be used if you are interested in
/// the type of the value without needing to match on it.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ValueType {
    /// Document node that holds everything. Note that this not the same as
    /// the document element.
    Document,
    /// Element; it has a name, attributes and optionally a namespace.
    Element,
    /// Text.
    Text,
    /// Comment.
    Comment,
    /// Processing instruction.
    ProcessingInstruction,
    /// CDATA section.
    CData,
    /// A free-standing attribute, made by
    /// [`Dom::create_attribute`](crate::Dom::create_attribute) and not yet
    /// set on an element.
    Attribute,
}

/// The value stored for a node.
///
/// Access it using [`Dom::value`](crate::Dom::value) or
/// mutably using [`Dom::value_mut`](crate::Dom::value_mut).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Document node. Note that this not the same as the document element.
    Document,
    /// Element; it has a name, attributes and optionally a namespace.
    Element(Element),
    /// Text. You can get and set the text value.
    Text(Text),
    /// Comment.
    Comment(Comment),
    /// Processing instruction.
    ProcessingInstruction(ProcessingInstruction),
    /// CDATA section.
    CData(CData),
    /// Attribute that is not attached to an element.
    Attribute(Attribute),
}

impl Value {
    /// Returns the type of the value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Document => ValueType::Document,
            Value::Element(_) => ValueType::Element,
            Value::Text(_) => ValueType::Text,
            Value::Comment(_) => ValueType::Comment,
            Value::ProcessingInstruction(_) => ValueType::ProcessingInstruction,
            Value::CData(_) => ValueType::CData,
            Value::Attribute(_) => ValueType::Attribute,
        }
    }
}

/// Attributes of an element, by name.
///
/// Names are unique and insertion order is preserved. Two attribute maps
/// compare equal when they hold the same names and values, in any order.
pub type Attributes = IndexMap<String, String>;

/// Element value.
///
/// Example: `<foo/>` or `<foo bar="baz"/>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) namespace: Option<String>,
    pub(crate) attributes: Attributes,
}

impl Element {
    pub(crate) fn new(name: String, namespace: Option<String>) -> Self {
        Element {
            name,
            namespace,
            attributes: Attributes::new(),
        }
    }

    /// The name of the element, as written (including any prefix).
    ///
    /// ```rust
    /// let mut dom = domtree::Dom::new();
    /// let doc = dom.parse_string("<doc/>")?;
    /// let doc_el = dom.document_element(doc)?;
    /// assert_eq!(dom.element(doc_el).unwrap().name(), "doc");
    /// # Ok::<(), domtree::Error>(())
    /// ```
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The namespace URI of the element, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Set or clear the namespace URI.
    pub fn set_namespace(&mut self, namespace: Option<String>) {
        self.namespace = namespace;
    }

    /// The attributes of the element.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Get an attribute by name.
    ///
    /// ```rust
    /// let mut dom = domtree::Dom::new();
    /// let doc = dom.parse_string(r#"<doc a="A" />"#)?;
    /// let doc_el = dom.document_element(doc)?;
    /// let element = dom.element(doc_el).unwrap();
    ///
    /// assert_eq!(element.get_attribute("a"), Some("A"));
    /// assert_eq!(element.get_attribute("b"), None);
    /// # Ok::<(), domtree::Error>(())
    /// ```
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    /// Set an attribute value, returning the previous value.
    ///
    /// An existing attribute keeps its position; a new one is added last.
    pub fn set_attribute<N: Into<String>, S: Into<String>>(
        &mut self,
        name: N,
        value: S,
    ) -> Option<String> {
        self.attributes.insert(name.into(), value.into())
    }

    /// Remove an attribute, returning its value.
    ///
    /// The remaining attributes keep their order.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.shift_remove(name)
    }
}

/// Text value.
///
/// Example: `Bar` in `<foo>Bar</foo>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub(crate) text: String,
}

impl Text {
    pub(crate) fn new(text: String) -> Self {
        Text { text }
    }

    /// Get the text value.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Set the text value.
    pub fn set<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }
}

/// Comment.
///
/// Example: `<!-- foo -->`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub(crate) text: String,
}

impl Comment {
    pub(crate) fn new(text: String) -> Self {
        Comment { text }
    }

    /// Get the comment text.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Set the comment text.
    pub fn set<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }
}

/// Processing instruction.
///
/// Example: `<?foo?>` or `<?foo bar?>`. Data is the empty string when
/// the instruction has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingInstruction {
    pub(crate) target: String,
    pub(crate) data: String,
}

impl ProcessingInstruction {
    pub(crate) fn new(target: String, data: String) -> Self {
        ProcessingInstruction { target, data }
    }

    /// Get processing instruction target.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Get processing instruction data.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Set target.
    pub fn set_target<S: Into<String>>(&mut self, target: S) {
        self.target = target.into();
    }

    /// Set data.
    pub fn set_data<S: Into<String>>(&mut self, data: S) {
        self.data = data.into();
    }
}

/// CDATA section.
///
/// Example: `<![CDATA[a < b]]>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CData {
    pub(crate) text: String,
}

impl CData {
    pub(crate) fn new(text: String) -> Self {
        CData { text }
    }

    /// Get the character data.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Set the character data.
    pub fn set<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }
}

/// A free-standing attribute node.
///
/// Equality looks at the name and value only.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub(crate) name: String,
    pub(crate) value: String,
    /// The element it was set on, once it has been used.
    pub(crate) owner_element: Option<Node>,
}

impl PartialEq for Attribute {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.value == other.value
    }
}

impl Eq for Attribute {}

impl Attribute {
    pub(crate) fn new(name: String, value: String) -> Self {
        Attribute {
            name,
            value,
            owner_element: None,
        }
    }

    /// The element this attribute was set on with
    /// [`Dom::set_attribute_node`](crate::Dom::set_attribute_node), if any.
    pub fn owner_element(&self) -> Option<Node> {
        self.owner_element
    }

    /// Attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the attribute value.
    pub fn set_value<S: Into<String>>(&mut self, value: S) {
        self.value = value.into();
    }
}
