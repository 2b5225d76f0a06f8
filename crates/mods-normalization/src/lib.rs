//! Normalization of legacy MODS documents.
//!
//! Raw MODS carries many spellings of the same thing: empty elements left
//! behind by editors, legacy event labels, untyped place terms, both ends of
//! a date range flagged as the key date. The passes here rewrite a document
//! into one canonical shape so it can be compared with crosswalk output.
//!
//! # Overview
//!
//! - [`origin_info`], [`title`], [`geo`]: one `normalize` entry point per
//!   category
//! - [`normalize`] / [`normalize_with`]: the full pipeline (origin-info, then
//!   title, then geo extension)
//! - [`normalize_missing_title`]: title synthesis, outside the pipeline
//! - [`NormalizationPipeline`] / [`execute_normalization`]: custom pass lists
//!
//! # Example
//!
//! ```ignore
//! use mods_normalization::normalize;
//! use mods_xml::Document;
//!
//! let document = Document::parse(xml)?;
//! let canonical = normalize(&document);
//! ```
//!
//! # Design Principles
//!
//! - **Copy in, copy out**: every entry point returns a new document
//! - **Idempotent passes**: normalizing canonical output changes nothing
//! - **Local edits**: passes never reorder siblings they do not touch

mod error;
mod executor;
mod options;
mod pipeline;
mod types;

pub mod geo;
pub mod origin_info;
pub mod title;

pub use error::{NormalizationError, Result};
pub use executor::execute_normalization;
pub use options::{HYDRUS_LABEL, NormalizationOptions};
pub use pipeline::{normalize, normalize_str, normalize_with};
pub use title::{normalize_missing_title, normalize_missing_title_with};
pub use types::{NormalizationPass, NormalizationPipeline, PassCategory};
