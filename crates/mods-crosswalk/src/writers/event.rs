//! `originInfo`.

use mods_model::{Content, DescriptiveValue, Event};
use mods_xml::Element;

use super::{display_name, non_blank, with_authority, with_group, with_language};
use crate::context::WriterContext;
use crate::error::Result;
use crate::ids::{GroupId, GroupKind};
use crate::vocab;

/// Event notes that have their own `originInfo` child.
const NOTE_ELEMENTS: [(&str, &str); 3] = [
    ("edition", "edition"),
    ("issuance", "issuance"),
    ("frequency", "frequency"),
];

pub(crate) fn write(
    parent: &mut Element,
    events: &[Event],
    ctx: &mut WriterContext<'_>,
) -> Result<()> {
    for (idx, event) in events.iter().enumerate() {
        if event.is_empty() {
            continue;
        }
        let field = format!("event[{idx}]");
        let branches: Vec<&Event> = event
            .parallel_event
            .iter()
            .filter(|branch| !branch.is_empty())
            .collect();
        if branches.is_empty() {
            push_non_empty(parent, origin_info(event, None, None, &field, ctx));
            continue;
        }
        let id = ctx.next_id(GroupKind::AltRepGroup);
        for branch in branches {
            push_non_empty(parent, origin_info(branch, event.kind(), Some(&id), &field, ctx));
        }
    }
    Ok(())
}

/// An event whose names and notes all produced nothing leaves a bare
/// `originInfo`; it is dropped.
fn push_non_empty(parent: &mut Element, origin_info: Element) {
    if origin_info.has_children() {
        parent.push(origin_info);
    }
}

fn origin_info(
    event: &Event,
    inherited_kind: Option<&str>,
    group: Option<&GroupId>,
    field: &str,
    ctx: &WriterContext<'_>,
) -> Element {
    let kind = event.kind().or(inherited_kind);
    let mut element = Element::new("originInfo");
    if let Some(kind) = kind {
        match vocab::event_type(kind) {
            Some(mapped) => element = element.with_attr("eventType", mapped),
            None => ctx.warn_unmapped("Unknown event type", kind, field),
        }
    }
    element = element.with_opt_attr(
        "displayLabel",
        non_blank(event.display_label.as_deref()),
    );
    element = with_group(element, group);
    if let Some(first_date) = event.date.first() {
        element = with_language(element, first_date);
    }

    for date in &event.date {
        push_dates(&mut element, date, kind, field, ctx);
    }
    for location in &event.location {
        if let Some(place) = place(location) {
            element.push(place);
        }
    }
    for contributor in &event.contributor {
        for name in &contributor.name {
            if let Some(text) = display_name(name) {
                element.push(with_authority(Element::new("publisher"), name).with_text(text));
            }
        }
    }
    for note in &event.note {
        let (Some(kind), Some(text)) = (note.kind(), note.text()) else {
            continue;
        };
        match lookup_note(kind) {
            Some(tag) => element.push(Element::new(tag).with_text(text)),
            None => ctx.warn_unmapped("Unknown event note type", kind, field),
        }
    }
    element
}

fn lookup_note(kind: &str) -> Option<&'static str> {
    NOTE_ELEMENTS
        .iter()
        .find(|(term, _)| *term == kind)
        .map(|(_, tag)| *tag)
}

fn push_dates(
    element: &mut Element,
    date: &DescriptiveValue,
    event_kind: Option<&str>,
    field: &str,
    ctx: &WriterContext<'_>,
) {
    let date_kind = date.kind().or(event_kind);
    let tag = date_kind.and_then(vocab::date_element).unwrap_or("dateOther");
    match date.content() {
        Content::Value(_) if date.text().is_some() => {
            let point = DatePoint::single(tag, date_kind);
            element.push(date_element(&point, date, None, field, ctx));
        }
        Content::Structured(points) => {
            for value in points.iter().filter(|value| value.text().is_some()) {
                if let Some(which @ ("start" | "end")) = value.kind() {
                    let point = DatePoint {
                        tag,
                        date_kind,
                        point: Some(which),
                    };
                    element.push(date_element(&point, value, Some(date), field, ctx));
                }
            }
        }
        _ => {}
    }
}

/// Where a date value is written.
struct DatePoint<'a> {
    tag: &'static str,
    date_kind: Option<&'a str>,
    point: Option<&'a str>,
}

impl<'a> DatePoint<'a> {
    fn single(tag: &'static str, date_kind: Option<&'a str>) -> Self {
        Self {
            tag,
            date_kind,
            point: None,
        }
    }
}

/// One date element. A structured date's points inherit encoding,
/// qualifier and status from the enclosing date; only the start point of a
/// primary range is marked as the key date.
fn date_element(
    target: &DatePoint<'_>,
    date: &DescriptiveValue,
    range: Option<&DescriptiveValue>,
    field: &str,
    ctx: &WriterContext<'_>,
) -> Element {
    let mut element = Element::new(target.tag);
    let encoding = date
        .encoding
        .as_ref()
        .or_else(|| range.and_then(|range| range.encoding.as_ref()))
        .and_then(|encoding| non_blank(encoding.code.as_deref()));
    element = element.with_opt_attr("encoding", encoding);

    let qualifier = date
        .qualifier()
        .or_else(|| range.and_then(DescriptiveValue::qualifier));
    if let Some(qualifier) = qualifier {
        match vocab::date_qualifier(qualifier) {
            Some(mapped) => element = element.with_attr("qualifier", mapped),
            None => ctx.warn_unmapped("Unknown date qualifier", qualifier, field),
        }
    }
    let primary =
        date.has_status("primary") || range.is_some_and(|range| range.has_status("primary"));
    if primary && target.point != Some("end") {
        element = element.with_attr("keyDate", "yes");
    }
    element = element.with_opt_attr("point", target.point);
    if target.tag == "dateOther" {
        element = element.with_opt_attr("type", target.date_kind);
    }
    element.with_text(date.text().unwrap_or_default())
}

fn place(location: &DescriptiveValue) -> Option<Element> {
    let mut place = Element::new("place");
    if let Some(text) = location.text() {
        place.push(
            with_authority(Element::new("placeTerm"), location)
                .with_attr("type", "text")
                .with_text(text),
        );
    }
    if let Some(code) = location.code() {
        place.push(
            with_authority(Element::new("placeTerm"), location)
                .with_attr("type", "code")
                .with_text(code),
        );
    }
    if !place.has_children() && location.uri().is_some() {
        place.push(with_authority(Element::new("placeTerm"), location));
    }
    place.has_children().then_some(place)
}
