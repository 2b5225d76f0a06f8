//! Pipeline execution.

use mods_xml::Document;

use crate::types::NormalizationPipeline;

/// Run `pipeline` over a copy of `document`.
///
/// Passes run strictly in pipeline order; the input is never modified.
pub fn execute_normalization(document: &Document, pipeline: &NormalizationPipeline) -> Document {
    let mut normalized = document.clone();
    for pass in pipeline.passes() {
        let span = tracing::debug_span!("normalize_pass", pass = pass.name());
        let _guard = span.enter();

        let changes = pass.apply(normalized.root_mut());
        if changes > 0 {
            tracing::debug!(changes, "pass rewrote document");
        } else {
            tracing::trace!("pass made no changes");
        }
    }
    normalized
}
