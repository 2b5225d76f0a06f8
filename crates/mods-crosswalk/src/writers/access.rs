//! `location`, `accessCondition` and access contacts.

use mods_model::{Access, DescriptiveValue};
use mods_xml::Element;

use super::{with_authority, with_display_label};
use crate::context::WriterContext;
use crate::error::Result;
use crate::vocab;

const PRIMARY_DISPLAY: &str = "primary display";

pub(crate) fn write(
    parent: &mut Element,
    access: Option<&Access>,
    purl: Option<&str>,
    ctx: &mut WriterContext<'_>,
) -> Result<()> {
    let mut location = Element::new("location");
    let has_primary_url =
        access.is_some_and(|access| access.url.iter().any(|url| url.has_status("primary")));
    if let Some(purl) = purl
        && !has_primary_url
    {
        location.push(
            Element::new("url")
                .with_attr("usage", PRIMARY_DISPLAY)
                .with_text(purl),
        );
    }

    let Some(access) = access else {
        if location.has_children() {
            parent.push(location);
        }
        return Ok(());
    };

    for physical in &access.physical_location {
        let Some(text) = physical.text() else { continue };
        let element = if physical.is_type("shelf locator") {
            Element::new("shelfLocator")
        } else {
            with_authority(
                Element::new("physicalLocation").with_opt_attr("type", physical.kind()),
                physical,
            )
        };
        location.push(with_display_label(element, physical).with_text(text));
    }
    for digital in &access.digital_location {
        if let Some(text) = digital.text() {
            let element = Element::new("physicalLocation").with_opt_attr("type", digital.kind());
            location.push(with_display_label(element, digital).with_text(text));
        }
    }
    for repository in &access.digital_repository {
        if let Some(text) = repository.text() {
            let element = with_authority(
                Element::new("physicalLocation").with_attr("type", "repository"),
                repository,
            );
            location.push(element.with_text(text));
        }
    }
    for url in &access.url {
        if let Some(text) = url.text() {
            let mut element = Element::new("url");
            if url.has_status("primary") {
                element = element.with_attr("usage", PRIMARY_DISPLAY);
            }
            location.push(with_display_label(element, url).with_text(text));
        }
    }
    if location.has_children() {
        parent.push(location);
    }

    for (idx, note) in access.note.iter().enumerate() {
        if let Some(element) = access_condition(note, &format!("access.note[{idx}]"), ctx) {
            parent.push(element);
        }
    }
    for contact in &access.access_contact {
        let Some(text) = contact.text() else { continue };
        if contact.is_type("email") {
            parent.push(
                Element::new("note")
                    .with_attr("type", "contact")
                    .with_attr("displayLabel", "Contact")
                    .with_text(text),
            );
        } else if contact.is_type("repository") {
            let repository = with_authority(
                Element::new("physicalLocation").with_attr("type", "repository"),
                contact,
            );
            parent.push(Element::new("location").with_child(repository.with_text(text)));
        } else {
            ctx.warn_unmapped(
                "Unknown access contact type",
                contact.kind().unwrap_or_default(),
                "access.accessContact",
            );
        }
    }
    Ok(())
}

fn access_condition(
    note: &DescriptiveValue,
    field: &str,
    ctx: &WriterContext<'_>,
) -> Option<Element> {
    let kind = note.kind()?;
    let Some(mapped) = vocab::access_condition_type(kind) else {
        ctx.warn_unmapped("Unknown access note type", kind, field);
        return None;
    };
    let mut element = Element::new("accessCondition").with_attr("type", mapped);
    element = with_display_label(element, note);
    element = element.with_opt_attr("xlink:href", note.uri());
    match note.text() {
        Some(text) => Some(element.with_text(text)),
        None if element.has_attr("xlink:href") => Some(element),
        None => None,
    }
}
