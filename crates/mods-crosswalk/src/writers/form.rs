//! `genre`, `typeOfResource`, `physicalDescription` and cartographic
//! subjects.

use mods_model::DescriptiveValue;
use mods_xml::Element;

use super::{expand_parallel, with_authority, with_display_label, with_group, with_language};
use crate::context::WriterContext;
use crate::error::Result;

/// Where a form value lands in MODS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormTarget {
    Genre,
    ResourceType,
    Physical(&'static str),
    Cartographic(&'static str),
}

impl FormTarget {
    fn for_type(kind: &str) -> Option<Self> {
        let target = match kind {
            "genre" => Self::Genre,
            "resource type" => Self::ResourceType,
            "extent" => Self::Physical("extent"),
            "form" => Self::Physical("form"),
            "media type" => Self::Physical("internetMediaType"),
            "digital origin" => Self::Physical("digitalOrigin"),
            "reformatting quality" => Self::Physical("reformattingQuality"),
            "map scale" => Self::Cartographic("scale"),
            "map projection" => Self::Cartographic("projection"),
            _ => return None,
        };
        Some(target)
    }
}

/// Resource types that become `typeOfResource` flags instead of text.
const RESOURCE_TYPE_FLAGS: [&str; 2] = ["collection", "manuscript"];

pub(crate) fn write(
    parent: &mut Element,
    forms: &[DescriptiveValue],
    ctx: &mut WriterContext<'_>,
) -> Result<()> {
    let flags: Vec<&'static str> = RESOURCE_TYPE_FLAGS
        .into_iter()
        .filter(|flag| forms.iter().any(|form| is_flag(form, flag)))
        .collect();
    let mut flags_pending = !flags.is_empty();
    let mut physical = Element::new("physicalDescription");
    let mut cartographics = Element::new("cartographics");

    for (idx, form) in forms.iter().enumerate() {
        if !form.has_content() {
            continue;
        }
        let field = format!("form[{idx}]");
        let Some(kind) = form.kind() else {
            ctx.warn("Form without a type", &[("path", ctx.path_to(&field).as_str())]);
            continue;
        };
        let Some(target) = FormTarget::for_type(kind) else {
            ctx.warn_unmapped("Unknown form type", kind, &field);
            continue;
        };
        match target {
            FormTarget::Genre => {
                let (branches, group) = expand_parallel(form, ctx);
                for branch in branches {
                    if let Some(text) = branch.text() {
                        let genre = form_element("genre", branch, text);
                        parent.push(with_group(genre, group.as_ref()));
                    }
                }
            }
            FormTarget::ResourceType => {
                if RESOURCE_TYPE_FLAGS.iter().any(|flag| is_flag(form, flag)) {
                    continue;
                }
                let Some(text) = form.text() else { continue };
                let mut element = form_element("typeOfResource", form, text);
                if flags_pending {
                    element = with_flags(element, &flags);
                    flags_pending = false;
                }
                parent.push(element);
            }
            FormTarget::Physical(tag) => {
                if let Some(text) = form.text() {
                    physical.push(form_element(tag, form, text));
                }
                for note in &form.note {
                    if let Some(text) = note.text() {
                        let element = with_display_label(Element::new("note"), note)
                            .with_opt_attr("type", note.kind())
                            .with_text(text);
                        physical.push(element);
                    }
                }
            }
            FormTarget::Cartographic(tag) => {
                if let Some(text) = form.text() {
                    cartographics.push(Element::new(tag).with_text(text));
                }
            }
        }
    }

    if flags_pending {
        parent.push(with_flags(Element::new("typeOfResource"), &flags));
    }
    if physical.has_children() {
        parent.push(physical);
    }
    if cartographics.has_children() {
        parent.push(Element::new("subject").with_child(cartographics));
    }
    Ok(())
}

fn form_element(tag: &str, form: &DescriptiveValue, text: &str) -> Element {
    let mut element = Element::new(tag);
    if form.has_status("primary") {
        element = element.with_attr("usage", "primary");
    }
    element = with_display_label(element, form);
    element = with_language(element, form);
    with_authority(element, form).with_text(text)
}

fn is_flag(form: &DescriptiveValue, flag: &str) -> bool {
    form.is_type("resource type")
        && form
            .text()
            .is_some_and(|text| text.trim().eq_ignore_ascii_case(flag))
        && form
            .source
            .as_ref()
            .and_then(|source| source.value.as_deref())
            .is_some_and(|source| source.eq_ignore_ascii_case("MODS resource types"))
}

fn with_flags(element: Element, flags: &[&str]) -> Element {
    flags
        .iter()
        .fold(element, |element, flag| element.with_attr(*flag, "yes"))
}
