//! `name`.

use mods_model::{Content, Contributor, DescriptiveValue};
use mods_xml::Element;

use super::{
    display_name, expand_parallel, non_blank, with_authority, with_display_label, with_group,
    with_language,
};
use crate::context::WriterContext;
use crate::error::Result;
use crate::ids::{GroupId, GroupKind};
use crate::vocab;

pub(crate) fn write(
    parent: &mut Element,
    contributors: &[Contributor],
    ctx: &mut WriterContext<'_>,
) -> Result<()> {
    for (idx, contributor) in contributors.iter().enumerate() {
        let field = format!("contributor[{idx}]");
        if !contributor.name.iter().any(DescriptiveValue::has_content) {
            tracing::debug!(path = %ctx.path_to(&field), "skipping contributor without a name");
            continue;
        }
        for name in contributor.name.iter().filter(|name| name.has_content()) {
            let (branches, group) = expand_parallel(name, ctx);
            for branch in branches {
                let element = name_element(contributor, branch, group.as_ref(), &field, ctx);
                parent.push(element);
            }
        }
    }
    Ok(())
}

fn name_element(
    contributor: &Contributor,
    name: &DescriptiveValue,
    group: Option<&GroupId>,
    field: &str,
    ctx: &WriterContext<'_>,
) -> Element {
    let mut element = Element::new("name");
    if let Some(kind) = contributor.kind() {
        match vocab::name_type(kind) {
            Some(mapped) => element = element.with_attr("type", mapped),
            None => ctx.warn_unmapped("Unknown contributor type", kind, field),
        }
    }
    if contributor.is_primary() {
        element = element.with_attr("usage", "primary");
    }
    element = with_group(element, group);
    if let Some(id) = display_name(name).and_then(|text| ctx.name_title_group(&text)) {
        element = element.with_attr(GroupKind::NameTitleGroup.attribute(), id.as_str());
    }
    element = with_language(element, name);
    element = with_display_label(element, name);
    element = with_authority(element, name);
    element = element.with_opt_attr("xlink:href", non_blank(contributor.value_at.as_deref()));

    push_name_parts(&mut element, name, field, ctx);
    for identifier in &contributor.identifier {
        if let Some(text) = identifier.text().or_else(|| identifier.uri()) {
            let kind = identifier.kind().and_then(vocab::identifier_type);
            element.push(
                Element::new("nameIdentifier")
                    .with_opt_attr("type", kind)
                    .with_text(text),
            );
        }
    }
    for note in &contributor.note {
        let Some(text) = note.text() else { continue };
        match note.kind() {
            Some("description") => element.push(Element::new("description").with_text(text)),
            Some("affiliation") => element.push(Element::new("affiliation").with_text(text)),
            Some("display name") => element.push(Element::new("displayForm").with_text(text)),
            Some(other) => ctx.warn_unmapped("Unknown contributor note type", other, field),
            None => element.push(Element::new("description").with_text(text)),
        }
    }
    for role in &contributor.role {
        if let Some(role) = role_element(role) {
            element.push(role);
        }
    }
    element
}

/// Append `namePart` children for a plain or structured name.
pub(crate) fn push_name_parts(
    element: &mut Element,
    name: &DescriptiveValue,
    field: &str,
    ctx: &WriterContext<'_>,
) {
    match name.content() {
        Content::Value(text) => element.push(Element::new("namePart").with_text(text)),
        Content::Structured(parts) | Content::Grouped(parts) => {
            for part in parts {
                let Some(text) = part.text() else { continue };
                let part_type = match part.kind() {
                    None => None,
                    Some(kind) => vocab::name_part_type(kind).unwrap_or_else(|| {
                        ctx.warn_unmapped("Unknown name part type", kind, field);
                        None
                    }),
                };
                element.push(
                    Element::new("namePart")
                        .with_opt_attr("type", part_type)
                        .with_text(text),
                );
            }
        }
        Content::Parallel(_) | Content::Empty => {}
    }
}

fn role_element(role: &DescriptiveValue) -> Option<Element> {
    let mut element = Element::new("role");
    if let Some(text) = role.text() {
        element.push(
            with_authority(Element::new("roleTerm"), role)
                .with_attr("type", "text")
                .with_text(text),
        );
    }
    if let Some(code) = role.code() {
        element.push(
            with_authority(Element::new("roleTerm"), role)
                .with_attr("type", "code")
                .with_text(code),
        );
    }
    element.has_children().then_some(element)
}
