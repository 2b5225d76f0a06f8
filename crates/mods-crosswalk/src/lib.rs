//! Crosswalk from descriptive metadata records to MODS XML.
//!
//! # Overview
//!
//! - [`transform`] / [`transform_with`]: build a complete `mods` document
//!   from a [`Description`](mods_model::Description)
//! - [`write_description`]: the orchestrator, for callers that assemble
//!   their own root
//! - [`GroupIdAllocator`]: per-document `altRepGroup` / `nameTitleGroup`
//!   ids
//! - [`vocab`]: the fixed vocabulary tables that determine output
//!
//! # Example
//!
//! ```ignore
//! use mods_crosswalk::transform;
//!
//! let description: mods_model::Description = serde_json::from_str(json)?;
//! let document = transform(&description, "bc123df4567")?;
//! println!("{}", document.to_xml_string(true)?);
//! ```
//!
//! Unknown vocabulary values never fail a transform. The mapped attribute is
//! omitted and a warning goes to the [`Notifier`](mods_common::Notifier).

mod context;
mod description;
mod error;
mod ids;
mod options;
mod transform;
mod writers;

pub mod vocab;

pub use context::WriterContext;
pub use description::{Field, write_description};
pub use error::{CrosswalkError, Result};
pub use ids::{GroupId, GroupIdAllocator, GroupKind};
pub use options::{DEFAULT_MODS_VERSION, TransformOptions};
pub use transform::{
    MODS_NAMESPACE, RDF_NAMESPACE, XLINK_NAMESPACE, XSI_NAMESPACE, declared_mods_version,
    schema_location, transform, transform_to_string, transform_with,
};
