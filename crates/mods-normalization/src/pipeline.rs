//! Whole-document normalization.

use mods_common::{Notifier, TracingNotifier};
use mods_xml::Document;

use crate::error::{NormalizationError, Result};
use crate::executor::execute_normalization;
use crate::options::NormalizationOptions;
use crate::title::normalize_missing_title_with;
use crate::types::NormalizationPipeline;

/// Run the full pipeline with default options.
pub fn normalize(document: &Document) -> Document {
    normalize_with(document, &NormalizationOptions::default(), &TracingNotifier)
}

/// Run the full pipeline, then missing-title synthesis when
/// `options.fallback_label` is set.
pub fn normalize_with(
    document: &Document,
    options: &NormalizationOptions,
    notifier: &dyn Notifier,
) -> Document {
    let span = tracing::info_span!("normalize", geo = options.geo);
    let _guard = span.enter();

    let normalized = execute_normalization(document, &NormalizationPipeline::full(options));
    match options.fallback_label.as_deref() {
        Some(label) => normalize_missing_title_with(&normalized, label, notifier),
        None => normalized,
    }
}

/// Parse, normalize and re-serialize (indented) a MODS document.
pub fn normalize_str(
    xml: &str,
    options: &NormalizationOptions,
    notifier: &dyn Notifier,
) -> Result<String> {
    let document = Document::parse(xml)?;
    if !document.root().is("mods") {
        return Err(NormalizationError::UnexpectedRoot {
            name: document.root().name().to_string(),
        });
    }
    let normalized = normalize_with(&document, options, notifier);
    Ok(normalized.to_xml_string(true)?)
}
