//! Top-level transform: the `mods` root and its attributes.

use std::sync::LazyLock;

use mods_common::{Notifier, TracingNotifier};
use mods_model::{Description, DescriptiveValue};
use mods_xml::{Document, Element};
use regex::Regex;

use crate::context::WriterContext;
use crate::description::write_description;
use crate::error::Result;
use crate::ids::GroupIdAllocator;
use crate::options::TransformOptions;

pub const MODS_NAMESPACE: &str = "http://www.loc.gov/mods/v3";
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const RDF_NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// Declared MODS version in a "record origin" note.
static MODS_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"MODS version (\d+\.\d+)").expect("Invalid MODS version regex")
});

/// Convert a record with default options, reporting diagnostics to
/// `tracing`.
pub fn transform(description: &Description, druid: &str) -> Result<Document> {
    transform_with(
        description,
        druid,
        &TransformOptions::default(),
        &TracingNotifier,
    )
}

/// Convert a record into a MODS document.
///
/// The record is validated first; a record that violates the model's
/// structural invariants fails before any output is built.
pub fn transform_with(
    description: &Description,
    druid: &str,
    options: &TransformOptions,
    notifier: &dyn Notifier,
) -> Result<Document> {
    let span = tracing::info_span!("transform", druid);
    let _guard = span.enter();

    description.validate()?;
    let version =
        declared_mods_version(description).unwrap_or(options.default_mods_version.as_str());
    let mut root = Element::new("mods")
        .with_attr("xmlns", MODS_NAMESPACE)
        .with_attr("xmlns:xlink", XLINK_NAMESPACE)
        .with_attr("xmlns:xsi", XSI_NAMESPACE)
        .with_attr("xmlns:rdf", RDF_NAMESPACE)
        .with_attr("version", version)
        .with_attr("xsi:schemaLocation", schema_location(version));

    let mut ids = GroupIdAllocator::new();
    let mut ctx = WriterContext::new(&mut ids, notifier, druid);
    write_description(&mut root, description, &mut ctx)?;

    tracing::debug!(
        version,
        elements = root.elements().count(),
        "transform complete"
    );
    Ok(Document::new(root))
}

/// Convert and serialize, indenting when `options.pretty` is set.
pub fn transform_to_string(
    description: &Description,
    druid: &str,
    options: &TransformOptions,
    notifier: &dyn Notifier,
) -> Result<String> {
    let document = transform_with(description, druid, options, notifier)?;
    Ok(document.to_xml_string(options.pretty)?)
}

/// The version named by an admin-metadata "record origin" note, if any.
pub fn declared_mods_version(description: &Description) -> Option<&str> {
    description
        .admin_metadata
        .as_ref()?
        .note
        .iter()
        .filter(|note| note.is_type("record origin"))
        .filter_map(DescriptiveValue::text)
        .find_map(|text| MODS_VERSION.captures(text))
        .and_then(|captures| captures.get(1))
        .as_ref()
        .map(regex::Match::as_str)
}

/// `xsi:schemaLocation` for a MODS version.
pub fn schema_location(version: &str) -> String {
    format!(
        "{MODS_NAMESPACE} http://www.loc.gov/standards/mods/v3/mods-{}.xsd",
        version.replace('.', "-")
    )
}
