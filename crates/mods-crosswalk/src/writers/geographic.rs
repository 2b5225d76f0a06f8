//! The geo `extension`: an RDF description with Dublin Core and GML.

use mods_model::{Content, DescriptiveValue, Geographic};
use mods_xml::Element;

use crate::context::WriterContext;
use crate::error::Result;

const DC_NAMESPACE: &str = "http://purl.org/dc/elements/1.1/";
const GML_NAMESPACE: &str = "http://www.opengis.net/gml/3.2/";

/// Bounding box parts in `lowerCorner` / `upperCorner` order.
const LOWER_CORNER: [&str; 2] = ["west", "south"];
const UPPER_CORNER: [&str; 2] = ["east", "north"];

pub(crate) fn write(
    parent: &mut Element,
    geographic: &[Geographic],
    purl: Option<&str>,
    ctx: &mut WriterContext<'_>,
) -> Result<()> {
    for (idx, geo) in geographic.iter().enumerate() {
        let field = format!("geographic[{idx}]");
        let mut description = Element::new("rdf:Description").with_opt_attr("rdf:about", purl);

        for form in &geo.form {
            let Some(text) = form.text() else { continue };
            match form.kind() {
                Some("media type") => description.push(Element::new("dc:format").with_text(text)),
                Some("type") => description.push(Element::new("dc:type").with_text(text)),
                Some(other) => ctx.warn_unmapped("Unknown geographic form type", other, &field),
                None => {}
            }
        }
        for subject in &geo.subject {
            match subject.kind() {
                Some("bounding box coordinates") => {
                    if let Some(bounded_by) = bounding_box(subject) {
                        description.push(bounded_by);
                    } else {
                        let path = ctx.path_to(&field);
                        ctx.warn("Incomplete bounding box", &[("path", path.as_str())]);
                    }
                }
                Some("coverage") => {
                    if let Some(coverage) = coverage(subject) {
                        description.push(coverage);
                    }
                }
                Some(other) => ctx.warn_unmapped("Unknown geographic subject type", other, &field),
                None => {}
            }
        }

        if description.has_children() {
            let rdf = Element::new("rdf:RDF")
                .with_attr("xmlns:gml", GML_NAMESPACE)
                .with_attr("xmlns:dc", DC_NAMESPACE)
                .with_child(description);
            parent.push(
                Element::new("extension")
                    .with_attr("displayLabel", "geo")
                    .with_child(rdf),
            );
        }
    }
    Ok(())
}

fn bounding_box(subject: &DescriptiveValue) -> Option<Element> {
    let Content::Structured(parts) = subject.content() else {
        return None;
    };
    let corner = |names: [&str; 2]| -> Option<String> {
        let values = names
            .iter()
            .map(|name| parts.iter().find(|part| part.is_type(name))?.text())
            .collect::<Option<Vec<_>>>()?;
        Some(values.join(" "))
    };
    let lower = corner(LOWER_CORNER)?;
    let upper = corner(UPPER_CORNER)?;
    let srs_name = subject
        .standard
        .as_ref()
        .and_then(|standard| standard.code.as_deref());
    let envelope = Element::new("gml:Envelope")
        .with_opt_attr("gml:srsName", srs_name)
        .with_child(Element::new("gml:lowerCorner").with_text(lower))
        .with_child(Element::new("gml:upperCorner").with_text(upper));
    Some(Element::new("gml:boundedBy").with_child(envelope))
}

fn coverage(subject: &DescriptiveValue) -> Option<Element> {
    if subject.text().is_none() && subject.uri().is_none() {
        return None;
    }
    let language = subject
        .value_language
        .as_ref()
        .and_then(|language| language.code.as_deref());
    Some(
        Element::new("dc:coverage")
            .with_opt_attr("rdf:resource", subject.uri())
            .with_opt_attr("dc:language", language)
            .with_opt_attr("dc:title", subject.text()),
    )
}
