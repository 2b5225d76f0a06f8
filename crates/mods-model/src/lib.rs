//! Descriptive metadata model.
//!
//! The types mirror the JSON shape of a descriptive record (camelCase keys,
//! absent sequences default to empty) and carry the structural invariant
//! checks the crosswalk relies on.

pub mod description;
pub mod error;
pub mod value;
pub mod vocabulary;

pub use description::{
    Access, AdminMetadata, Contributor, Description, Event, Geographic, Language,
    RelatedResource,
};
pub use error::{ModelError, Result};
pub use value::{Content, DescriptiveValue, Source, Standard, Validate, ValueLanguage};
