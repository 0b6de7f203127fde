//! The JSON tree encoding.
//!
//! Every node maps onto plain JSON:
//!
//! - an element is an array: a descriptor object first, then its encoded
//!   children in order. The descriptor holds the tag name under `#tag`, the
//!   namespace (if any) under `#ns`, and each attribute as a key of its own.
//! - text is a bare string.
//! - a comment, processing instruction or CDATA section is an array holding
//!   a single object, with `#tag` set to `#comment`, `#pi` or `#cdata` and
//!   the character data under `#data`. A processing instruction carries its
//!   target under `#target`.
//! - a document is encoded as its document element. If it also has
//!   top-level comments or processing instructions, it is an array with
//!   descriptor `{"#tag": "#document"}` followed by all its children.
//!
//! ```rust
//! let mut dom = domtree::Dom::new();
//! let doc = dom.parse_string(r#"<p class="intro">Hello<!--note--></p>"#)?;
//! let json = dom.to_json(doc)?;
//! assert_eq!(
//!     json,
//!     r##"[{"#tag":"p","class":"intro"},"Hello",[{"#tag":"#comment","#data":"note"}]]"##
//! );
//!
//! let loaded = dom.load_json(&json)?;
//! assert!(dom.compare(doc, loaded));
//! # Ok::<(), domtree::Error>(())
//! ```

mod loader;
mod saver;

pub use loader::Loader;
pub use saver::Saver;

use serde::{Deserialize, Serialize};

use crate::domdata::{Dom, Node};
use crate::error::Error;

pub(crate) const TAG: &str = "#tag";
pub(crate) const DATA: &str = "#data";
pub(crate) const TARGET: &str = "#target";
pub(crate) const NAMESPACE: &str = "#ns";
pub(crate) const COMMENT: &str = "#comment";
pub(crate) const PROCESSING_INSTRUCTION: &str = "#pi";
pub(crate) const CDATA: &str = "#cdata";
pub(crate) const DOCUMENT: &str = "#document";

/// Output settings for the [`Saver`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Indent the JSON output. Compact by default.
    pub pretty: bool,
}

/// ## JSON codec
impl Dom {
    /// Encode a node and its descendants as JSON text.
    ///
    /// See [`Saver`] for control over the output.
    pub fn to_json(&self, node: Node) -> Result<String, Error> {
        Saver::new(self, node).to_json()
    }

    /// Decode JSON text into a new document.
    pub fn load_json(&mut self, json: &str) -> Result<Node, Error> {
        Loader::new(self).load(json)
    }
}
