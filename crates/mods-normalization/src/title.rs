//! `titleInfo` passes and missing-title synthesis.

use mods_common::{Notifier, TracingNotifier};
use mods_xml::{Document, Element};

use crate::executor::execute_normalization;
use crate::options::HYDRUS_LABEL;
use crate::types::NormalizationPipeline;

const TITLE_PARTS: [&str; 5] = ["nonSort", "title", "subTitle", "partNumber", "partName"];

/// Run the title passes over a copy of `document`.
pub fn normalize(document: &Document) -> Document {
    execute_normalization(document, &NormalizationPipeline::title())
}

pub(crate) fn remove_blank_parts(root: &mut Element) -> usize {
    let mut removed = 0;
    root.for_each_named_mut("titleInfo", &mut |title_info| {
        let before = title_info.elements().count();
        title_info.retain_elements(|part| {
            !(TITLE_PARTS.contains(&part.local_name()) && part.is_blank())
        });
        removed += before - title_info.elements().count();
    });
    removed
}

pub(crate) fn remove_empty_title_info(root: &mut Element) -> usize {
    let mut removed = 0;
    root.walk_mut(&mut |element| {
        let before = element.elements().count();
        element.retain_elements(|child| {
            !(child.is("titleInfo")
                && !child.has_element_children()
                && !child.has_attr("xlink:href"))
        });
        removed += before - element.elements().count();
    });
    removed
}

/// Give a title-less document the fallback title, reporting to `tracing`.
///
/// See [`normalize_missing_title_with`].
pub fn normalize_missing_title(document: &Document, fallback_label: &str) -> Document {
    normalize_missing_title_with(document, fallback_label, &TracingNotifier)
}

/// Append `<titleInfo><title>{label}</title></titleInfo>` to a document that
/// has no non-blank top-level title and no linked `titleInfo`.
///
/// Only the Hydrus label is synthesized. A blank label is reported to the
/// notifier and leaves the document unchanged.
pub fn normalize_missing_title_with(
    document: &Document,
    fallback_label: &str,
    notifier: &dyn Notifier,
) -> Document {
    let mut normalized = document.clone();
    if has_title(normalized.root()) {
        return normalized;
    }
    if fallback_label.trim().is_empty() {
        notifier.warn("would synthesize an empty title", &[]);
        return normalized;
    }
    if fallback_label != HYDRUS_LABEL {
        tracing::debug!(label = fallback_label, "no title synthesized for label");
        return normalized;
    }

    let root = normalized.root_mut();
    let title = Element::new(root.qualify("title")).with_text(fallback_label);
    let title_info = Element::new(root.qualify("titleInfo")).with_child(title);
    root.push(title_info);
    tracing::debug!(label = fallback_label, "synthesized missing title");
    normalized
}

fn has_title(root: &Element) -> bool {
    root.elements_named("titleInfo").any(|title_info| {
        title_info.has_attr("xlink:href")
            || title_info
                .elements_named("title")
                .any(|title| !title.is_blank())
    })
}
