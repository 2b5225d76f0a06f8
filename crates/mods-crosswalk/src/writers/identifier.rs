//! `identifier`.

use mods_model::DescriptiveValue;
use mods_xml::Element;

use super::{expand_parallel, with_display_label, with_group};
use crate::context::WriterContext;
use crate::error::Result;
use crate::ids::GroupId;
use crate::vocab;

pub(crate) fn write(
    parent: &mut Element,
    identifiers: &[DescriptiveValue],
    ctx: &mut WriterContext<'_>,
) -> Result<()> {
    for (idx, identifier) in identifiers.iter().enumerate() {
        if !identifier.has_content() {
            continue;
        }
        let field = format!("identifier[{idx}]");
        let (branches, group) = expand_parallel(identifier, ctx);
        for branch in branches {
            if let Some(element) = identifier_element(branch, group.as_ref(), &field, ctx) {
                parent.push(element);
            }
        }
    }
    Ok(())
}

/// A value with a URI is always typed "uri"; otherwise the type goes
/// through the identifier table.
fn identifier_element(
    identifier: &DescriptiveValue,
    group: Option<&GroupId>,
    field: &str,
    ctx: &WriterContext<'_>,
) -> Option<Element> {
    let text = identifier.text().or_else(|| identifier.uri())?;
    let kind = if identifier.uri().is_some() {
        Some("uri")
    } else {
        identifier.kind().and_then(|kind| {
            let mapped = vocab::identifier_type(kind);
            if mapped.is_none() {
                ctx.warn_unmapped("Unknown identifier type", kind, field);
            }
            mapped
        })
    };

    let mut element = Element::new("identifier").with_opt_attr("type", kind);
    element = with_display_label(element, identifier);
    if identifier.has_status("invalid") {
        element = element.with_attr("invalid", "yes");
    }
    element = with_group(element, group);
    Some(element.with_text(text))
}
