//! Error types for the crosswalk.

use mods_model::ModelError;
use mods_xml::XmlError;
use thiserror::Error;

/// Errors that abort a single transform.
///
/// Unknown vocabulary values are not errors; they are reported to the
/// [`Notifier`](mods_common::Notifier) and the mapped attribute is omitted.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CrosswalkError {
    /// The record lacks structure a writer depends on.
    #[error("Structural violation at {path}: {message}")]
    Structural {
        /// Field path of the offending value, e.g. `description.subject[2]`.
        path: String,
        /// What was expected.
        message: String,
    },

    /// The record failed model validation before any output was written.
    #[error("Invalid descriptive record: {0}")]
    Model(#[from] ModelError),

    /// Serializing the output document failed.
    #[error("XML error: {0}")]
    Xml(#[from] XmlError),
}

impl CrosswalkError {
    pub(crate) fn structural(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Structural {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type for crosswalk operations.
pub type Result<T> = std::result::Result<T, CrosswalkError>;
