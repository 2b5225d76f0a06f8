//! `recordInfo`.

use mods_model::{AdminMetadata, DescriptiveValue, Event};
use mods_xml::Element;

use super::language::{push_script, push_terms};
use super::{non_blank, with_authority};
use crate::context::WriterContext;
use crate::error::Result;

pub(crate) fn write(
    parent: &mut Element,
    admin: Option<&AdminMetadata>,
    ctx: &mut WriterContext<'_>,
) -> Result<()> {
    let Some(admin) = admin.filter(|admin| !admin.is_empty()) else {
        return Ok(());
    };
    let mut record_info = Element::new("recordInfo");

    for contributor in &admin.contributor {
        for name in &contributor.name {
            if let Some(text) = name.text().or_else(|| name.code()) {
                let source = with_authority(Element::new("recordContentSource"), name);
                record_info.push(source.with_text(text));
            }
        }
    }
    for (idx, event) in admin.event.iter().enumerate() {
        push_event_dates(&mut record_info, event, idx, ctx);
    }
    for language in &admin.language {
        let mut element = Element::new("languageOfCataloging");
        if language.status.as_deref() == Some("primary") {
            element = element.with_attr("usage", "primary");
        }
        push_terms(
            &mut element,
            "languageTerm",
            non_blank(language.value.as_deref()),
            non_blank(language.code.as_deref()),
            non_blank(language.uri.as_deref()),
            language.source.as_ref(),
        );
        if let Some(script) = language.script.as_ref() {
            push_script(&mut element, script);
        }
        if element.has_children() {
            record_info.push(element);
        }
    }
    for standard in &admin.metadata_standard {
        if let Some(text) = standard.text().or_else(|| standard.code()) {
            let element = with_authority(Element::new("descriptionStandard"), standard);
            record_info.push(element.with_text(text));
        }
    }
    for identifier in &admin.identifier {
        if let Some(text) = identifier.text() {
            let source = identifier.kind().or_else(|| {
                identifier
                    .source
                    .as_ref()
                    .and_then(|source| non_blank(source.code.as_deref()))
            });
            record_info.push(
                Element::new("recordIdentifier")
                    .with_opt_attr("source", source)
                    .with_text(text),
            );
        }
    }
    for note in &admin.note {
        if let Some(element) = note_element(note) {
            record_info.push(element);
        }
    }

    if record_info.has_children() {
        parent.push(record_info);
    }
    Ok(())
}

fn push_event_dates(
    record_info: &mut Element,
    event: &Event,
    idx: usize,
    ctx: &WriterContext<'_>,
) {
    let tag = match event.kind() {
        Some("creation") => "recordCreationDate",
        Some("modification") => "recordChangeDate",
        Some(other) => {
            ctx.warn_unmapped(
                "Unknown admin metadata event type",
                other,
                &format!("adminMetadata.event[{idx}]"),
            );
            return;
        }
        None => return,
    };
    for date in &event.date {
        if let Some(text) = date.text() {
            let encoding = date
                .encoding
                .as_ref()
                .and_then(|encoding| non_blank(encoding.code.as_deref()));
            record_info.push(
                Element::new(tag)
                    .with_opt_attr("encoding", encoding)
                    .with_text(text),
            );
        }
    }
}

fn note_element(note: &DescriptiveValue) -> Option<Element> {
    let text = note.text()?;
    let element = if note.is_type("record origin") {
        Element::new("recordOrigin")
    } else {
        Element::new("recordInfoNote")
            .with_opt_attr("type", note.kind())
            .with_opt_attr("displayLabel", note.display_label())
    };
    Some(element.with_text(text))
}
