//! Serializing a [`Document`] with quick-xml.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::Result;
use crate::tree::{Document, Element, Node};

impl Document {
    /// Serialize with an XML declaration.
    ///
    /// `pretty` indents nested elements by two spaces; text-only elements
    /// stay on one line.
    pub fn to_xml_string(&self, pretty: bool) -> Result<String> {
        let mut xml = if pretty {
            Writer::new_with_indent(Vec::new(), b' ', 2)
        } else {
            Writer::new(Vec::new())
        };
        xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        write_element(&mut xml, self.root())?;
        Ok(String::from_utf8(xml.into_inner())?)
    }
}

impl Element {
    /// Serialize this element alone, without a declaration.
    pub fn to_xml_fragment(&self) -> Result<String> {
        let mut xml = Writer::new(Vec::new());
        write_element(&mut xml, self)?;
        Ok(String::from_utf8(xml.into_inner())?)
    }
}

fn write_element<W: Write>(xml: &mut Writer<W>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name());
    for (key, value) in element.attributes() {
        start.push_attribute((key, value));
    }
    if !element.has_children() {
        xml.write_event(Event::Empty(start))?;
        return Ok(());
    }
    xml.write_event(Event::Start(start))?;
    for child in element.children() {
        match child {
            Node::Element(inner) => write_element(xml, inner)?,
            Node::Text(text) => xml.write_event(Event::Text(BytesText::new(text)))?,
        }
    }
    xml.write_event(Event::End(BytesEnd::new(element.name())))?;
    Ok(())
}
