//! Parsing XML text into a [`Document`] with quick-xml.

use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::encoding::Decoder;
use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::{BytesRef, BytesStart, Event};

use crate::error::{Result, XmlError};
use crate::tree::{Document, Element};

impl Document {
    /// Parse a complete document.
    ///
    /// Comments, processing instructions and the declaration are dropped.
    /// Whitespace-only text between elements is dropped; text inside
    /// text-only elements is kept verbatim.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(false);
        let decoder = reader.decoder();

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let position = reader.buffer_position() as u64;
            let event = reader.read_event().map_err(|err| XmlError::Syntax {
                position,
                message: err.to_string(),
            })?;
            match event {
                Event::Start(start) => stack.push(element_from_start(&start, decoder)?),
                Event::Empty(start) => {
                    let element = element_from_start(&start, decoder)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let Some(mut element) = stack.pop() else {
                        return Err(XmlError::Syntax {
                            position,
                            message: "unexpected closing tag".to_string(),
                        });
                    };
                    element.drop_layout_whitespace();
                    attach(&mut stack, &mut root, element)?;
                }
                Event::Text(text) => {
                    if let Some(parent) = stack.last_mut() {
                        let raw = decode(decoder, &text, position)?;
                        let unescaped = unescape(&raw).map_err(|err| XmlError::Syntax {
                            position,
                            message: err.to_string(),
                        })?;
                        parent.push_text(unescaped.into_owned());
                    }
                }
                Event::CData(data) => {
                    if let Some(parent) = stack.last_mut() {
                        parent.push_text(decode(decoder, &data, position)?.into_owned());
                    }
                }
                Event::GeneralRef(reference) => {
                    if let Some(parent) = stack.last_mut() {
                        parent.push_text(resolve_reference(&reference, decoder, position)?);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(XmlError::Syntax {
                position: reader.buffer_position() as u64,
                message: "unclosed element at end of input".to_string(),
            });
        }
        let root = root.ok_or(XmlError::NoRoot)?;
        tracing::trace!(root = root.name(), "parsed document");
        Ok(Document::new(root))
    }
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => {
            parent.push(element);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(element);
            Ok(())
        }
        None => Err(XmlError::MultipleRoots),
    }
}

fn element_from_start(start: &BytesStart<'_>, decoder: Decoder) -> Result<Element> {
    let qname = start.name();
    let name = decoder
        .decode(qname.as_ref())
        .map_err(|err| encoding_error(&err))?;
    let mut element = Element::new(name.into_owned());
    for attr in start.attributes() {
        let attr = attr.map_err(|err| XmlError::Syntax {
            position: 0,
            message: err.to_string(),
        })?;
        let key = decoder
            .decode(attr.key.as_ref())
            .map_err(|err| encoding_error(&err))?
            .into_owned();
        let value = attr.decode_and_unescape_value(decoder)?.into_owned();
        element.set_attr(key, value);
    }
    Ok(element)
}

fn decode<'b>(decoder: Decoder, bytes: &'b [u8], position: u64) -> Result<Cow<'b, str>> {
    decoder.decode(bytes).map_err(|err| XmlError::Syntax {
        position,
        message: err.to_string(),
    })
}

fn resolve_reference(reference: &BytesRef<'_>, decoder: Decoder, position: u64) -> Result<String> {
    if let Some(ch) = reference.resolve_char_ref()? {
        return Ok(ch.to_string());
    }
    let name = decode(decoder, reference, position)?;
    resolve_predefined_entity(&name)
        .map(str::to_string)
        .ok_or_else(|| XmlError::UnknownEntity(name.into_owned()))
}

fn encoding_error(err: &impl std::fmt::Display) -> XmlError {
    XmlError::Syntax {
        position: 0,
        message: err.to_string(),
    }
}
