//! Owned XML element tree.
//!
//! Writers build documents by appending to [`Element`]s; normalizers parse an
//! existing document with [`Document::parse`], rewrite a clone of the tree and
//! serialize it back with [`Document::to_xml_string`].

mod error;
mod parse;
mod tree;
mod write;

pub use error::{Result, XmlError};
pub use tree::{Document, Element, Node};
