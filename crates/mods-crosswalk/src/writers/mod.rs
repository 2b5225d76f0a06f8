//! Field writers.
//!
//! Each writer appends the MODS elements for one slice of a descriptive
//! record to the parent element and writes nothing for empty input.

pub(crate) mod access;
pub(crate) mod admin_metadata;
pub(crate) mod contributor;
pub(crate) mod event;
pub(crate) mod form;
pub(crate) mod geographic;
pub(crate) mod identifier;
pub(crate) mod language;
pub(crate) mod note;
pub(crate) mod part;
pub(crate) mod related_resource;
pub(crate) mod subject;
pub(crate) mod title;

use mods_model::{DescriptiveValue, Source};
use mods_xml::Element;

use crate::context::WriterContext;
use crate::ids::{GroupId, GroupKind};

/// The branches of a value: its parallel values, each tagged with one fresh
/// `altRepGroup`, or the value itself with no group.
pub(crate) fn expand_parallel<'v>(
    value: &'v DescriptiveValue,
    ctx: &mut WriterContext<'_>,
) -> (Vec<&'v DescriptiveValue>, Option<GroupId>) {
    let branches: Vec<&DescriptiveValue> = value
        .parallel_value
        .iter()
        .filter(|branch| branch.has_content())
        .collect();
    if branches.is_empty() {
        return (vec![value], None);
    }
    let id = ctx.next_id(GroupKind::AltRepGroup);
    (branches, Some(id))
}

pub(crate) fn with_group(element: Element, id: Option<&GroupId>) -> Element {
    element.with_opt_attr(
        GroupKind::AltRepGroup.attribute(),
        id.map(GroupId::as_str),
    )
}

/// `authority`, `authorityURI` and `valueURI` from a value and its source.
pub(crate) fn with_authority(element: Element, value: &DescriptiveValue) -> Element {
    with_source(element, value.source.as_ref()).with_opt_attr("valueURI", value.uri())
}

pub(crate) fn with_source(element: Element, source: Option<&Source>) -> Element {
    element
        .with_opt_attr("authority", source_code(source))
        .with_opt_attr(
            "authorityURI",
            source.and_then(|source| non_blank(source.uri.as_deref())),
        )
}

/// `lang` and `script` from the value's language.
pub(crate) fn with_language(element: Element, value: &DescriptiveValue) -> Element {
    let Some(language) = value.value_language.as_ref() else {
        return element;
    };
    let script = language
        .value_script
        .as_ref()
        .and_then(|script| non_blank(script.code.as_deref()));
    element
        .with_opt_attr("lang", non_blank(language.code.as_deref()))
        .with_opt_attr("script", script)
}

pub(crate) fn with_display_label(element: Element, value: &DescriptiveValue) -> Element {
    element.with_opt_attr("displayLabel", value.display_label())
}

pub(crate) fn source_code(source: Option<&Source>) -> Option<&str> {
    source.and_then(|source| non_blank(source.code.as_deref()))
}

/// A name's display text: its value, or its structured parts joined.
pub(crate) fn display_name(value: &DescriptiveValue) -> Option<String> {
    if let Some(text) = value.text() {
        return Some(text.trim().to_string());
    }
    let parts: Vec<&str> = value
        .structured_value
        .iter()
        .chain(&value.grouped_value)
        .filter_map(DescriptiveValue::text)
        .map(str::trim)
        .collect();
    (!parts.is_empty()).then(|| parts.join(", "))
}

/// A simple text element with authority attributes.
pub(crate) fn text_element(tag: &str, value: &DescriptiveValue) -> Option<Element> {
    let text = value.text()?;
    Some(with_authority(Element::new(tag), value).with_text(text))
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}
