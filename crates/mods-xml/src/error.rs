use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum XmlError {
    /// The input is not well-formed.
    #[error("XML syntax error at byte {position}: {message}")]
    Syntax { position: u64, message: String },

    /// An entity reference other than the predefined ones or a character reference.
    #[error("Unknown entity reference: &{0};")]
    UnknownEntity(String),

    #[error("Document has no root element")]
    NoRoot,

    #[error("Document has more than one root element")]
    MultipleRoots,

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialized XML is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, XmlError>;
