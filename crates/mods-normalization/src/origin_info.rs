//! `originInfo` passes.

use std::sync::LazyLock;

use mods_model::vocabulary::legacy_event_type;
use mods_xml::{Document, Element};
use regex::Regex;

use crate::executor::execute_normalization;
use crate::types::NormalizationPipeline;

/// Attributes that keep an element without text.
const IDENTIFYING_ATTRIBUTES: [&str; 2] = ["valueURI", "xlink:href"];

/// Copied between place terms as one set.
const AUTHORITY_ATTRIBUTES: [&str; 3] = ["valueURI", "authority", "authorityURI"];

const DATE_FIELDS: [&str; 7] = [
    "dateIssued",
    "dateCreated",
    "dateCaptured",
    "dateValid",
    "dateModified",
    "copyrightDate",
    "dateOther",
];

const MISSPELLED_MARC_COUNTRY: &str = "marcountry";
const MARC_COUNTRY: &str = "marccountry";

/// The trailing run of periods and whitespace, when it has a period.
static TRAILING_PERIOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.\s]*\.\s*$").expect("Invalid trailing period regex"));

/// Run every origin-info pass over a copy of `document`.
pub fn normalize(document: &Document) -> Document {
    execute_normalization(document, &NormalizationPipeline::origin_info())
}

pub(crate) fn remove_empty_children(root: &mut Element) -> usize {
    let mut removed = 0;
    root.for_each_named_mut("originInfo", &mut |origin_info| {
        let before = origin_info.elements().count();
        origin_info.retain_elements(|child| !is_empty(child));
        removed += before - origin_info.elements().count();
    });
    removed
}

fn is_empty(element: &Element) -> bool {
    element.is_blank() && !has_identifying_attribute(element)
}

fn has_identifying_attribute(element: &Element) -> bool {
    IDENTIFYING_ATTRIBUTES.iter().any(|key| element.has_attr(key))
        || element.elements().any(has_identifying_attribute)
}

pub(crate) fn remove_empty_origin_info(root: &mut Element) -> usize {
    let mut removed = 0;
    root.walk_mut(&mut |element| {
        let before = element.elements().count();
        element.retain_elements(|child| !(child.is("originInfo") && is_empty_origin_info(child)));
        removed += before - element.elements().count();
    });
    removed
}

/// No element children, and nothing left that could carry meaning on its
/// own: either no attributes or no text.
fn is_empty_origin_info(origin_info: &Element) -> bool {
    !origin_info.has_element_children()
        && (!origin_info.has_attributes() || origin_info.text().trim().is_empty())
}

pub(crate) fn backfill_legacy_event_type(root: &mut Element) -> usize {
    let mut changed = 0;
    root.for_each_named_mut("originInfo", &mut |origin_info| {
        if origin_info.attr_non_blank("eventType").is_some() {
            return;
        }
        let Some(event_type) = origin_info
            .attr("displayLabel")
            .and_then(legacy_event_type)
        else {
            return;
        };
        origin_info.set_attr("eventType", event_type);
        origin_info.remove_attr("displayLabel");
        changed += 1;
    });
    changed
}

pub(crate) fn infer_place_term_type(root: &mut Element) -> usize {
    let mut changed = 0;
    root.for_each_named_mut("originInfo", &mut |origin_info| {
        origin_info.for_each_named_mut("placeTerm", &mut |term| {
            if !term.has_attr("type") && !term.text().trim().is_empty() {
                term.set_attr("type", "text");
                changed += 1;
            }
        });
    });
    changed
}

pub(crate) fn propagate_place_authority(root: &mut Element) -> usize {
    let mut changed = 0;
    root.for_each_named_mut("originInfo", &mut |origin_info| {
        for place in origin_info.elements_named_mut("place") {
            changed += propagate_within(place);
        }
    });
    changed
}

/// Only a place with exactly one text and one code term is touched, and
/// only when one term has authority attributes and the other has none.
fn propagate_within(place: &mut Element) -> usize {
    let terms_of = |kind: &str| {
        place
            .elements_named("placeTerm")
            .filter(|term| term.attr("type") == Some(kind))
            .collect::<Vec<_>>()
    };
    let (text_terms, code_terms) = (terms_of("text"), terms_of("code"));
    let ([text], [code]) = (text_terms.as_slice(), code_terms.as_slice()) else {
        return 0;
    };
    let (text_set, code_set) = (authority_set(text), authority_set(code));
    let (source, target_kind) = match (text_set.is_empty(), code_set.is_empty()) {
        (false, true) => (text_set, "code"),
        (true, false) => (code_set, "text"),
        _ => return 0,
    };

    let Some(target) = place
        .elements_named_mut("placeTerm")
        .find(|term| term.attr("type") == Some(target_kind))
    else {
        return 0;
    };
    for (key, value) in source {
        target.set_attr(key, value);
    }
    1
}

fn authority_set(term: &Element) -> Vec<(&'static str, String)> {
    AUTHORITY_ATTRIBUTES
        .iter()
        .filter_map(|key| term.attr(key).map(|value| (*key, value.to_string())))
        .collect()
}

/// Applies to every `authority` attribute in the document, not only those
/// under `originInfo`.
pub(crate) fn fix_authority_code_spelling(root: &mut Element) -> usize {
    let mut changed = 0;
    root.walk_mut(&mut |element| {
        if element.attr("authority") == Some(MISSPELLED_MARC_COUNTRY) {
            element.set_attr("authority", MARC_COUNTRY);
            changed += 1;
        }
    });
    changed
}

pub(crate) fn single_key_date(root: &mut Element) -> usize {
    let mut changed = 0;
    root.for_each_named_mut("originInfo", &mut |origin_info| {
        for field in DATE_FIELDS {
            let is_key_pair = origin_info
                .elements_named(field)
                .filter(|date| is_pointed_key_date(date))
                .count()
                == 2;
            if !is_key_pair {
                continue;
            }
            if let Some(end) = origin_info
                .elements_named_mut(field)
                .find(|date| is_pointed_key_date(date) && date.attr("point") == Some("end"))
            {
                end.remove_attr("keyDate");
                changed += 1;
            }
        }
    });
    changed
}

fn is_pointed_key_date(date: &Element) -> bool {
    date.has_attr("point") && date.attr("keyDate") == Some("yes")
}

pub(crate) fn strip_date_trailing_period(root: &mut Element) -> usize {
    let mut changed = 0;
    root.for_each_named_mut("originInfo", &mut |origin_info| {
        let dates = origin_info
            .elements_mut()
            .filter(|element| DATE_FIELDS.contains(&element.local_name()));
        for date in dates {
            let text = date.text();
            let stripped = TRAILING_PERIOD.replace(&text, "");
            if stripped.len() != text.len() && !stripped.trim().is_empty() {
                let stripped = stripped.into_owned();
                date.set_text(stripped);
                changed += 1;
            }
        }
    });
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin_info(children: Vec<Element>) -> Element {
        let mut origin_info = Element::new("originInfo");
        for child in children {
            origin_info.push(child);
        }
        Element::new("mods").with_child(origin_info)
    }

    #[test]
    fn identifying_attribute_keeps_empty_child() {
        let mut root = origin_info(vec![
            Element::new("place")
                .with_child(Element::new("placeTerm").with_attr("valueURI", "http://id.loc.gov/x")),
            Element::new("publisher").with_text("  "),
        ]);
        assert_eq!(remove_empty_children(&mut root), 1);
        let children: Vec<&str> = root
            .child("originInfo")
            .map(|element| element.elements().map(Element::name).collect())
            .unwrap_or_default();
        assert_eq!(children, ["place"]);
    }

    #[test]
    fn trailing_periods() {
        let mut root = origin_info(vec![
            Element::new("dateIssued").with_text("1990. ."),
            Element::new("dateCreated").with_text("ca. 1850"),
            Element::new("dateOther").with_text("."),
        ]);
        assert_eq!(strip_date_trailing_period(&mut root), 1);
        let texts: Vec<String> = root
            .child("originInfo")
            .expect("originInfo")
            .elements()
            .map(Element::text)
            .collect();
        assert_eq!(texts, ["1990", "ca. 1850", "."]);
        assert_eq!(strip_date_trailing_period(&mut root), 0);
    }

    #[test]
    fn partial_authority_sets_are_not_merged() {
        let place = Element::new("place")
            .with_child(
                Element::new("placeTerm")
                    .with_attr("type", "text")
                    .with_attr("authority", "naf"),
            )
            .with_child(
                Element::new("placeTerm")
                    .with_attr("type", "code")
                    .with_attr("authority", "marccountry"),
            );
        let mut root = origin_info(vec![place]);
        assert_eq!(propagate_place_authority(&mut root), 0);
    }
}
