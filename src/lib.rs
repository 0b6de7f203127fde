#![forbid(unsafe_code)]

//! An arena-backed markup document tree.
//!
//! All nodes of all documents live in a [`Dom`]; a [`Node`] is a cheap
//! handle into it. Trees are built from an ordered stream of structural
//! [`Event`]s by a [`Builder`], whether those events come from markup
//! ([`Dom::parse_string`]), from the JSON tree encoding ([`Loader`]) or
//! from your own code. Children and attributes can be picked with a small
//! selector syntax ([`Dom::select`]), and any tree can be written out as
//! markup ([`Dom::to_string`]) or as JSON ([`Saver`]).
//!
//! ```rust
//! use domtree::{Dom, Selection};
//!
//! let mut dom = Dom::new();
//! let doc = dom.parse_string("<html><body><p>Hello</p><p>World</p></body></html>")?;
//! let html = dom.document_element(doc)?;
//! let body = dom.select(html, "body:0")?.node().unwrap();
//!
//! let last = dom.select(body, "p:-1")?.node().unwrap();
//! assert_eq!(dom.to_string(last), "<p>World</p>");
//!
//! let json = dom.to_json(doc)?;
//! assert_eq!(
//!     json,
//!     r##"[{"#tag":"html"},[{"#tag":"body"},[{"#tag":"p"},"Hello"],[{"#tag":"p"},"World"]]]"##
//! );
//! let loaded = dom.load_json(&json)?;
//! assert!(dom.compare(doc, loaded));
//! # Ok::<(), domtree::Error>(())
//! ```
//!
//! A `Dom` does no locking. Reads and writes to the same document have to be
//! serialized by the caller.

mod access;
pub mod accessor;
mod builder;
pub mod codec;
mod compare;
mod creation;
mod domdata;
mod encoding;
mod entity;
mod error;
mod factory;
pub mod fixed;
mod manipulation;
mod parse;
#[cfg(any(test, feature = "proptest"))]
pub mod proptest;
mod serialize;
mod valueaccess;
mod xmlvalue;

pub use access::NodeEdge;
pub use accessor::{Position, Query, Selection, Selector};
pub use builder::{Builder, BuilderState, Event};
pub use codec::{Loader, Parameters, Saver};
pub use domdata::{Dom, Node};
pub use error::{Error, ErrorKind};
pub use factory::DocumentFactory;
pub use parse::{read_events, ParseOptions};
pub use xmlvalue::{
    Attribute, Attributes, CData, Comment, Element, ProcessingInstruction, Text, Value, ValueType,
};
