//! `subject` and `classification`.

use mods_model::{Content, DescriptiveValue};
use mods_xml::Element;

use super::contributor::push_name_parts;
use super::{
    expand_parallel, source_code, text_element, with_authority, with_display_label, with_group,
    with_language,
};
use crate::context::WriterContext;
use crate::error::{CrosswalkError, Result};
use crate::ids::GroupId;
use crate::vocab;

pub(crate) fn write(
    parent: &mut Element,
    subjects: &[DescriptiveValue],
    ctx: &mut WriterContext<'_>,
) -> Result<()> {
    for (idx, subject) in subjects.iter().enumerate() {
        if !subject.has_content() {
            continue;
        }
        let field = format!("subject[{idx}]");
        if subject.is_type("classification") {
            parent.push(classification(subject));
            continue;
        }
        let (branches, group) = expand_parallel(subject, ctx);
        let inherited = group.is_some().then_some(subject);
        for branch in branches {
            let kind = branch
                .kind()
                .or_else(|| inherited.and_then(DescriptiveValue::kind));
            if let Some(element) = subject_element(branch, kind, group.as_ref(), &field, ctx)? {
                parent.push(element);
            }
        }
    }
    Ok(())
}

fn classification(subject: &DescriptiveValue) -> Element {
    let edition = subject
        .source
        .as_ref()
        .and_then(|source| source.version.as_deref());
    let element = with_display_label(Element::new("classification"), subject);
    with_authority(element, subject)
        .with_opt_attr("edition", edition)
        .with_text(subject.text().or_else(|| subject.code()).unwrap_or_default())
}

fn subject_element(
    subject: &DescriptiveValue,
    kind: Option<&str>,
    group: Option<&GroupId>,
    field: &str,
    ctx: &WriterContext<'_>,
) -> Result<Option<Element>> {
    let mut element = Element::new("subject");
    element = with_display_label(element, subject);
    element = with_language(element, subject);
    element = with_group(element, group);
    element = element.with_opt_attr("authority", source_code(subject.source.as_ref()));

    match (kind, subject.content()) {
        (Some("name-title"), content) => {
            let parts: &[DescriptiveValue] = match content {
                Content::Structured(parts) | Content::Grouped(parts) => parts,
                _ => &[],
            };
            let Some(name) = parts.iter().find(|part| is_name_component(part)) else {
                return Err(CrosswalkError::structural(
                    ctx.path_to(field),
                    "name-title subject has no name component",
                ));
            };
            element.push(name_element(name, name.kind().unwrap_or("name"), field, ctx));
            for title in parts.iter().filter(|part| part.is_type("title")) {
                if let Some(title) = title_info(title) {
                    element.push(title);
                }
            }
        }
        (_, Content::Structured(components) | Content::Grouped(components)) => {
            for component in components {
                let component_kind = component.kind().unwrap_or("topic");
                if let Some(child) = child_element(component, component_kind, field, ctx) {
                    element.push(child);
                }
            }
        }
        (kind, Content::Value(_)) => {
            if let Some(child) = child_element(subject, kind.unwrap_or("topic"), field, ctx) {
                element.push(child);
            }
        }
        (_, Content::Parallel(_) | Content::Empty) => {}
    }
    Ok(element.has_children().then_some(element))
}

fn child_element(
    value: &DescriptiveValue,
    kind: &str,
    field: &str,
    ctx: &WriterContext<'_>,
) -> Option<Element> {
    if let Some(tag) = vocab::subject_element(kind) {
        return text_element(tag, value);
    }
    if vocab::name_type(kind).is_some() {
        return Some(name_element(value, kind, field, ctx));
    }
    if kind == "title" {
        return title_info(value);
    }
    ctx.warn_unmapped("Unknown subject type", kind, field);
    None
}

fn is_name_component(value: &DescriptiveValue) -> bool {
    value
        .kind()
        .is_some_and(|kind| kind == "name" || vocab::name_type(kind).is_some())
}

fn name_element(
    value: &DescriptiveValue,
    kind: &str,
    field: &str,
    ctx: &WriterContext<'_>,
) -> Element {
    let mut element = with_authority(
        Element::new("name").with_opt_attr("type", vocab::name_type(kind)),
        value,
    );
    push_name_parts(&mut element, value, field, ctx);
    element
}

fn title_info(value: &DescriptiveValue) -> Option<Element> {
    let text = value.text()?;
    let title = Element::new("title").with_text(text);
    Some(with_authority(Element::new("titleInfo"), value).with_child(title))
}
