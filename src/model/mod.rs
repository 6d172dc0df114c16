//! Data model for hardware IP projects.
//!
//! [`MetadataDocument`] holds a decoded `vyges-metadata.json` and offers
//! path lookups that never fail on missing intermediate keys.
//! [`ProjectKpis`] is the record the analyzer builds for a project tree.

mod kpis;
mod metadata;

pub use kpis::*;
pub use metadata::*;
