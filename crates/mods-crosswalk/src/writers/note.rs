//! `note`, `abstract` and `tableOfContents`.

use mods_model::{Content, DescriptiveValue};
use mods_xml::Element;

use super::{expand_parallel, part, with_display_label, with_group, with_language};
use crate::context::WriterContext;
use crate::error::Result;
use crate::ids::GroupId;
use crate::vocab;

const CONTENTS_SEPARATOR: &str = " -- ";

pub(crate) fn write(
    parent: &mut Element,
    notes: &[DescriptiveValue],
    ctx: &mut WriterContext<'_>,
) -> Result<()> {
    for (idx, note) in notes.iter().enumerate() {
        let field = format!("note[{idx}]");
        if note.is_type("part") {
            part::write(parent, note, &field, ctx)?;
            continue;
        }
        if !note.has_content() {
            continue;
        }
        let (branches, group) = expand_parallel(note, ctx);
        let inherited = group.is_some().then_some(note);
        for branch in branches {
            let kind = branch
                .kind()
                .or_else(|| inherited.and_then(DescriptiveValue::kind));
            if let Some(element) = note_element(branch, kind, group.as_ref(), &field, ctx) {
                parent.push(element);
            }
        }
    }
    Ok(())
}

fn note_element(
    note: &DescriptiveValue,
    kind: Option<&str>,
    group: Option<&GroupId>,
    field: &str,
    ctx: &WriterContext<'_>,
) -> Option<Element> {
    let mut element = match kind {
        None => Element::new("note"),
        Some("table of contents") => Element::new("tableOfContents"),
        Some(kind) => {
            if let Some(abstract_type) = vocab::abstract_type(kind) {
                Element::new("abstract").with_opt_attr("type", abstract_type)
            } else {
                let mapped = vocab::note_type(kind);
                if mapped.is_none() {
                    ctx.warn_unmapped("Unknown note type", kind, field);
                }
                Element::new("note").with_opt_attr("type", mapped)
            }
        }
    };
    element = with_display_label(element, note);
    element = with_language(element, note);
    element = with_group(element, group);
    element = element.with_opt_attr("xlink:href", note.value_at().or_else(|| note.uri()));

    let text = match note.content() {
        Content::Value(text) => text.to_string(),
        Content::Structured(items) | Content::Grouped(items) => items
            .iter()
            .filter_map(DescriptiveValue::text)
            .collect::<Vec<_>>()
            .join(CONTENTS_SEPARATOR),
        Content::Parallel(_) | Content::Empty => String::new(),
    };
    if text.trim().is_empty() && !element.has_attr("xlink:href") {
        return None;
    }
    if !text.is_empty() {
        element.push_text(text);
    }
    Some(element)
}
