//! `titleInfo`.

use mods_model::{Content, DescriptiveValue};
use mods_xml::Element;

use super::{
    display_name, expand_parallel, with_authority, with_display_label, with_group, with_language,
};
use crate::context::WriterContext;
use crate::error::Result;
use crate::ids::{GroupId, GroupKind};
use crate::vocab::{self, TITLE_PARTS};

pub(crate) fn write(
    parent: &mut Element,
    titles: &[DescriptiveValue],
    ctx: &mut WriterContext<'_>,
) -> Result<()> {
    for (idx, title) in titles.iter().enumerate() {
        if !title.has_content() {
            let path = ctx.path_to(&format!("title[{idx}]"));
            ctx.warn("Empty title node", &[("path", path.as_str())]);
            continue;
        }
        let (branches, group) = expand_parallel(title, ctx);
        let inherited = group.is_some().then_some(title);
        for branch in branches {
            let element = title_info(branch, inherited, group.as_ref(), idx, ctx);
            parent.push(element);
        }
    }
    Ok(())
}

fn title_info(
    title: &DescriptiveValue,
    parallel_parent: Option<&DescriptiveValue>,
    group: Option<&GroupId>,
    idx: usize,
    ctx: &mut WriterContext<'_>,
) -> Element {
    let kind = title
        .kind()
        .or_else(|| parallel_parent.and_then(DescriptiveValue::kind));
    let primary = title.has_status("primary")
        || parallel_parent.is_some_and(|parent| parent.has_status("primary"));

    let mut element = Element::new("titleInfo");
    match kind {
        Some("transliterated") => {
            let scheme = title
                .standard
                .as_ref()
                .and_then(|standard| standard.value.as_deref());
            element = element
                .with_attr("type", "translated")
                .with_opt_attr("transliteration", scheme);
        }
        Some("supplied") => element = element.with_attr("supplied", "yes"),
        Some("parallel") | None => {}
        Some(other) => match vocab::title_type(other) {
            Some(mapped) => element = element.with_attr("type", mapped),
            None => ctx.warn_unmapped("Unknown title type", other, &format!("title[{idx}]")),
        },
    }
    if primary {
        element = element.with_attr("usage", "primary");
    }
    element = with_language(element, title);
    element = with_group(element, group);

    if kind == Some("uniform")
        && let Some(name) = title
            .components_of_type("name")
            .find_map(display_name)
    {
        let id = ctx.next_id(GroupKind::NameTitleGroup);
        element = element.with_attr(GroupKind::NameTitleGroup.attribute(), id.as_str());
        ctx.link_name_title(name, id);
    }
    element = with_display_label(element, title);
    element = with_authority(element, title);

    match title.content() {
        Content::Value(text) => element.push(Element::new("title").with_text(text)),
        Content::Structured(parts) | Content::Grouped(parts) => {
            for (part_type, tag) in TITLE_PARTS {
                for part in parts.iter().filter(|part| part.is_type(part_type)) {
                    if let Some(text) = part.text() {
                        element.push(Element::new(tag).with_text(text));
                    }
                }
            }
        }
        Content::Parallel(_) | Content::Empty => {}
    }
    element
}
