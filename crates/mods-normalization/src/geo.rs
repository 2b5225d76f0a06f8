//! Passes over the geo `extension`.
//!
//! Only elements inside `extension displayLabel="geo"` are touched.

use std::sync::LazyLock;

use mods_xml::{Document, Element};
use regex::Regex;

use crate::executor::execute_normalization;
use crate::types::NormalizationPipeline;

const GEO_LABEL: &str = "geo";

/// `dc:` elements whose text is a single token list.
const COLLAPSED_TEXT: [&str; 2] = ["dc:format", "dc:type"];

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Run the geo-extension passes over a copy of `document`.
pub fn normalize(document: &Document) -> Document {
    execute_normalization(document, &NormalizationPipeline::geo())
}

/// Visit every geo extension and everything inside it.
fn for_each_geo_element<F>(root: &mut Element, mut visit: F)
where
    F: FnMut(&mut Element),
{
    root.for_each_named_mut("extension", &mut |extension| {
        if extension.attr("displayLabel") == Some(GEO_LABEL) {
            extension.walk_mut(&mut visit);
        }
    });
}

pub(crate) fn drop_blank_rdf_resource(root: &mut Element) -> usize {
    let mut removed = 0;
    for_each_geo_element(root, |element| {
        if element
            .attr("rdf:resource")
            .is_some_and(|resource| resource.trim().is_empty())
        {
            element.remove_attr("rdf:resource");
            removed += 1;
        }
    });
    removed
}

pub(crate) fn drop_gml_id(root: &mut Element) -> usize {
    let mut removed = 0;
    for_each_geo_element(root, |element| {
        if element.remove_attr("gml:id").is_some() {
            removed += 1;
        }
    });
    removed
}

pub(crate) fn collapse_whitespace(root: &mut Element) -> usize {
    let mut changed = 0;
    for_each_geo_element(root, |element| {
        if !COLLAPSED_TEXT.contains(&element.name()) {
            return;
        }
        let text = element.text();
        let collapsed = WHITESPACE_RUN.replace_all(text.trim(), " ");
        if collapsed != text {
            let collapsed = collapsed.into_owned();
            element.set_text(collapsed);
            changed += 1;
        }
    });
    changed
}

pub(crate) fn remove_empty_dc_elements(root: &mut Element) -> usize {
    let mut removed = 0;
    root.for_each_named_mut("extension", &mut |extension| {
        if extension.attr("displayLabel") == Some(GEO_LABEL) {
            removed += prune_empty_dc(extension);
        }
    });
    removed
}

/// Children first, so a `dc:` element emptied by the pruning below it goes
/// in the same run.
fn prune_empty_dc(element: &mut Element) -> usize {
    let mut removed: usize = element.elements_mut().map(prune_empty_dc).sum();
    let before = element.elements().count();
    element.retain_elements(|child| !is_empty_dc(child));
    removed += before - element.elements().count();
    removed
}

fn is_empty_dc(element: &Element) -> bool {
    element.prefix() == Some("dc")
        && !element.has_attributes()
        && !element.has_element_children()
        && element.is_blank()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geo(description: Element) -> Element {
        let rdf = Element::new("rdf:RDF").with_child(description);
        Element::new("mods").with_child(
            Element::new("extension")
                .with_attr("displayLabel", "geo")
                .with_child(rdf),
        )
    }

    #[test]
    fn whitespace_collapses_once() {
        let mut root = geo(Element::new("rdf:Description")
            .with_child(Element::new("dc:format").with_text("  image/jpeg;\n   format=Shapefile ")));
        assert_eq!(collapse_whitespace(&mut root), 1);
        assert_eq!(collapse_whitespace(&mut root), 0);
        let format = root.descendants_named("format");
        assert_eq!(format[0].text(), "image/jpeg; format=Shapefile");
    }

    #[test]
    fn emptied_dc_parents_go_in_one_run() {
        let mut root = geo(Element::new("rdf:Description").with_child(
            Element::new("dc:relation").with_child(Element::new("dc:identifier").with_text(" ")),
        ));
        assert_eq!(remove_empty_dc_elements(&mut root), 2);
        assert_eq!(remove_empty_dc_elements(&mut root), 0);
        assert!(root.descendants_named("relation").is_empty());
    }

    #[test]
    fn other_extensions_are_untouched() {
        let mut root = Element::new("mods").with_child(
            Element::new("extension")
                .with_attr("displayLabel", "other")
                .with_child(Element::new("dc:type").with_attr("gml:id", "x")),
        );
        let before = root.clone();
        assert_eq!(drop_gml_id(&mut root), 0);
        assert_eq!(remove_empty_dc_elements(&mut root), 0);
        assert_eq!(root, before);
    }
}
