//! `relatedItem`.
//!
//! Inline entries re-enter the orchestrator for their nested record.
//! Entries with `valueAt` are links and are written after all inline
//! entries.

use mods_model::{DescriptiveValue, RelatedResource};
use mods_xml::Element;

use super::{non_blank, source_code};
use crate::context::WriterContext;
use crate::description::write_description;
use crate::error::Result;
use crate::vocab;

const OTHER_RELATION_TYPE: &str = "other relation type";

pub(crate) fn write(
    parent: &mut Element,
    related: &[RelatedResource],
    ctx: &mut WriterContext<'_>,
) -> Result<()> {
    let mut references = Vec::new();
    for (idx, resource) in related.iter().enumerate() {
        let field = format!("relatedResource[{idx}]");
        if let Some(target) = resource.reference() {
            references.push((resource, target, field));
            continue;
        }

        let (other_relation, notes) = split_notes(&resource.note);
        let (mut item, unmapped) = wrapper(resource);
        if let Some(other) = other_relation {
            item = item
                .with_opt_attr("otherType", other.text())
                .with_opt_attr("otherTypeURI", other.uri())
                .with_opt_attr("otherTypeAuth", source_code(other.source.as_ref()));
        }

        let nested = resource.to_description(notes);
        write_description(&mut item, &nested, &mut ctx.nested(&field))?;
        if !item.has_element_children() {
            tracing::debug!(path = %ctx.path_to(&field), "skipping related resource without content");
            continue;
        }
        warn_unmapped(unmapped, &field, ctx);
        parent.push(item);
    }

    for (resource, target, field) in references {
        let (item, unmapped) = wrapper(resource);
        warn_unmapped(unmapped, &field, ctx);
        parent.push(item.with_attr("xlink:href", target));
    }
    Ok(())
}

/// `relatedItem` with its type and display label, plus the relation type
/// when it has no MODS equivalent.
fn wrapper(resource: &RelatedResource) -> (Element, Option<&str>) {
    let mut item = Element::new("relatedItem");
    let mut unmapped = None;
    if let Some(kind) = resource.kind() {
        match vocab::related_item_type(kind) {
            Some(Some(mapped)) => item = item.with_attr("type", mapped),
            Some(None) => {}
            None => unmapped = Some(kind),
        }
    }
    let item = item.with_opt_attr("displayLabel", non_blank(resource.display_label.as_deref()));
    (item, unmapped)
}

fn warn_unmapped(kind: Option<&str>, field: &str, ctx: &WriterContext<'_>) {
    if let Some(kind) = kind {
        ctx.warn_unmapped("Unknown related resource type", kind, field);
    }
}

/// The first "other relation type" note, and every note that is not one.
fn split_notes(notes: &[DescriptiveValue]) -> (Option<&DescriptiveValue>, Vec<DescriptiveValue>) {
    let other = notes.iter().find(|note| note.is_type(OTHER_RELATION_TYPE));
    let rest = notes
        .iter()
        .filter(|note| !note.is_type(OTHER_RELATION_TYPE))
        .cloned()
        .collect();
    (other, rest)
}
