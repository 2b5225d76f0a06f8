//! `language`.

use mods_model::{DescriptiveValue, Language, Source};
use mods_xml::Element;

use super::{non_blank, with_source};
use crate::context::WriterContext;
use crate::error::Result;

pub(crate) fn write(
    parent: &mut Element,
    languages: &[Language],
    _ctx: &mut WriterContext<'_>,
) -> Result<()> {
    for language in languages {
        let mut element = Element::new("language")
            .with_opt_attr("displayLabel", non_blank(language.display_label.as_deref()));
        if language.status.as_deref() == Some("primary") {
            element = element.with_attr("usage", "primary");
        }
        let uri = non_blank(language.uri.as_deref());
        push_terms(
            &mut element,
            "languageTerm",
            non_blank(language.value.as_deref()),
            non_blank(language.code.as_deref()),
            uri,
            language.source.as_ref(),
        );
        if let Some(script) = language.script.as_ref() {
            push_script(&mut element, script);
        }
        if element.has_children() {
            parent.push(element);
        }
    }
    Ok(())
}

/// Text and code terms for one language or script, sharing authority.
pub(crate) fn push_terms(
    element: &mut Element,
    tag: &str,
    text: Option<&str>,
    code: Option<&str>,
    uri: Option<&str>,
    source: Option<&Source>,
) {
    for (kind, term) in [("text", text), ("code", code)] {
        if let Some(term) = term {
            let term = with_source(Element::new(tag), source)
                .with_opt_attr("valueURI", uri)
                .with_attr("type", kind)
                .with_text(term);
            element.push(term);
        }
    }
}

pub(crate) fn push_script(element: &mut Element, script: &DescriptiveValue) {
    push_terms(
        element,
        "scriptTerm",
        script.text(),
        script.code(),
        script.uri(),
        script.source.as_ref(),
    );
}
