//! Error types for MODS normalization.

use mods_xml::XmlError;
use thiserror::Error;

/// Errors that can occur around a normalization run.
///
/// The passes themselves never fail; errors come from reading or writing
/// the document text.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NormalizationError {
    /// The input could not be parsed or the output serialized.
    #[error("XML error: {0}")]
    Xml(#[from] XmlError),

    /// The document root is not a `mods` element.
    #[error("Expected a mods root element, found {name}")]
    UnexpectedRoot {
        /// Qualified name of the root that was found.
        name: String,
    },
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizationError>;
