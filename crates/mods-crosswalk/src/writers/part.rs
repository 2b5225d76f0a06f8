//! `part`, from a note typed "part".
//!
//! A part note holds citation components (volume, issue, pages...) either
//! flatly under one `groupedValue` or as several instances under
//! `structuredValue`, each with its own `groupedValue`. Each instance becomes
//! one `part` element:
//!
//! - `detail` holds every component that is not reserved below, with the
//!   component type as the child tag; its `type` comes from "detail type".
//! - `extent` holds `list`, `start` and `end` in that order; its `unit` comes
//!   from "extent unit". `start`/`end` may sit in a nested structured value.
//! - "text" and "date" components become direct children of `part`.
//!
//! `detail` and `extent` take the position of their first component, so
//! direct children interleave with them in source order.

use std::sync::LazyLock;

use mods_model::{Content, DescriptiveValue};
use mods_xml::Element;
use regex::Regex;

use crate::context::WriterContext;
use crate::error::{CrosswalkError, Result};
use crate::vocab;

/// Detail children with a fixed tag.
const KNOWN_DETAIL_TAGS: [&str; 3] = ["number", "caption", "title"];

/// Component types written directly under `part`.
const DIRECT_TAGS: [&str; 2] = ["text", "date"];

/// Unprefixed XML element name.
static ELEMENT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{Alphabetic}_][\p{Alphabetic}\p{N}._-]*$")
        .expect("Invalid element name regex")
});

/// A child element of `detail`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PartChild {
    Known { tag: &'static str, text: String },
    /// Tag taken verbatim from the component type.
    Generic { tag: String, text: String },
}

impl PartChild {
    fn for_component(kind: &str, text: &str) -> Self {
        match KNOWN_DETAIL_TAGS.iter().copied().find(|tag| *tag == kind) {
            Some(tag) => Self::Known {
                tag,
                text: text.to_string(),
            },
            None => Self::Generic {
                tag: kind.to_string(),
                text: text.to_string(),
            },
        }
    }

    fn tag(&self) -> &str {
        match self {
            Self::Known { tag, .. } => *tag,
            Self::Generic { tag, .. } => tag.as_str(),
        }
    }

    fn into_element(self) -> Element {
        match self {
            Self::Known { tag, text } => Element::new(tag).with_text(text),
            Self::Generic { tag, text } => Element::new(tag).with_text(text),
        }
    }
}

enum Slot {
    Detail,
    Extent,
    Direct(Element),
}

/// Everything collected from one part instance.
#[derive(Default)]
struct PartInstance<'v> {
    slots: Vec<Slot>,
    detail_type: Option<&'static str>,
    detail: Vec<PartChild>,
    unit: Option<&'v str>,
    list: Option<&'v str>,
    start: Option<&'v str>,
    end: Option<&'v str>,
    has_detail_slot: bool,
    has_extent_slot: bool,
}

impl<'v> PartInstance<'v> {
    fn place_detail(&mut self) {
        if !self.has_detail_slot {
            self.has_detail_slot = true;
            self.slots.push(Slot::Detail);
        }
    }

    fn place_extent(&mut self) {
        if !self.has_extent_slot {
            self.has_extent_slot = true;
            self.slots.push(Slot::Extent);
        }
    }

    fn set_bound(&mut self, kind: &str, text: &'v str) {
        let slot = if kind == "start" {
            &mut self.start
        } else {
            &mut self.end
        };
        slot.get_or_insert(text);
        self.place_extent();
    }

    fn into_element(self, note: &DescriptiveValue) -> Option<Element> {
        let mut part =
            Element::new("part").with_opt_attr("displayLabel", note.display_label());
        let mut detail = Some(self.detail);
        let bounds = [("list", self.list), ("start", self.start), ("end", self.end)];
        for slot in self.slots {
            match slot {
                Slot::Detail => {
                    let children = detail.take().unwrap_or_default();
                    if !children.is_empty() {
                        let mut element =
                            Element::new("detail").with_opt_attr("type", self.detail_type);
                        for child in children {
                            element.push(child.into_element());
                        }
                        part.push(element);
                    }
                }
                Slot::Extent => {
                    let mut element = Element::new("extent").with_opt_attr("unit", self.unit);
                    for (tag, text) in bounds {
                        if let Some(text) = text {
                            element.push(Element::new(tag).with_text(text));
                        }
                    }
                    if element.has_children() {
                        part.push(element);
                    }
                }
                Slot::Direct(element) => part.push(element),
            }
        }
        part.has_children().then_some(part)
    }
}

pub(crate) fn write(
    parent: &mut Element,
    note: &DescriptiveValue,
    field: &str,
    ctx: &mut WriterContext<'_>,
) -> Result<()> {
    match note.content() {
        Content::Grouped(components) => push_part(parent, note, components, field, ctx),
        Content::Structured(instances) => {
            for (idx, instance) in instances.iter().enumerate() {
                if instance.grouped_value.is_empty() {
                    return Err(CrosswalkError::structural(
                        ctx.path_to(&format!("{field}.structuredValue[{idx}]")),
                        "part instance has no groupedValue",
                    ));
                }
                push_part(parent, note, &instance.grouped_value, field, ctx);
            }
        }
        Content::Value(_) | Content::Parallel(_) | Content::Empty => {
            let path = ctx.path_to(field);
            ctx.warn("Part note without components", &[("path", path.as_str())]);
        }
    }
    Ok(())
}

fn push_part(
    parent: &mut Element,
    note: &DescriptiveValue,
    components: &[DescriptiveValue],
    field: &str,
    ctx: &WriterContext<'_>,
) {
    let mut instance = PartInstance::default();
    for component in components {
        let Some(kind) = component.kind() else {
            continue;
        };
        match kind {
            "detail type" => {
                if let Some(value) = component.text() {
                    instance.detail_type = vocab::detail_type(value);
                    if instance.detail_type.is_none() {
                        ctx.warn_unmapped("Unknown part detail type", value, field);
                    }
                }
            }
            "extent unit" => instance.unit = component.text(),
            "list" => {
                if let Some(text) = component.text() {
                    instance.list.get_or_insert(text);
                    instance.place_extent();
                }
            }
            "start" | "end" => {
                if let Some(text) = component.text() {
                    instance.set_bound(kind, text);
                }
            }
            kind if DIRECT_TAGS.contains(&kind) => {
                if let Some(text) = component.text() {
                    instance
                        .slots
                        .push(Slot::Direct(Element::new(kind).with_text(text)));
                }
            }
            _ if !component.structured_value.is_empty() => {
                for bound in &component.structured_value {
                    if let (Some(bound_kind @ ("start" | "end")), Some(text)) =
                        (bound.kind(), bound.text())
                    {
                        instance.set_bound(bound_kind, text);
                    }
                }
            }
            kind => {
                let Some(text) = component.text() else {
                    continue;
                };
                let child = PartChild::for_component(kind, text);
                if !is_element_name(child.tag()) {
                    let path = ctx.path_to(field);
                    ctx.error(
                        "Part component type is not a valid element name",
                        &[("type", kind), ("path", path.as_str())],
                    );
                    continue;
                }
                instance.detail.push(child);
                instance.place_detail();
            }
        }
    }
    if let Some(element) = instance.into_element(note) {
        parent.push(element);
    }
}

fn is_element_name(tag: &str) -> bool {
    ELEMENT_NAME.is_match(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_are_not_generic() {
        assert!(matches!(
            PartChild::for_component("caption", "p."),
            PartChild::Known { tag: "caption", .. }
        ));
        assert_eq!(
            PartChild::for_component("volume", "2"),
            PartChild::Generic {
                tag: "volume".to_string(),
                text: "2".to_string()
            }
        );
    }

    #[test]
    fn element_names() {
        assert!(is_element_name("volume"));
        assert!(is_element_name("text"));
        assert!(is_element_name("_series.no-2"));
        assert!(!is_element_name("page number"));
        assert!(!is_element_name("1st"));
        assert!(!is_element_name(""));
    }
}
