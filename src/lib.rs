//! # rpm-inspect
//!
//! A structural inspector for RPM package archives.
//! Decodes the fixed lead record and both header sections (signature and
//! header), rendering every index entry's value as human-readable text.
//! Read-only: the archive payload is never interpreted.
pub mod rpm;

// Re-export the main types for convenience
pub use rpm::{
    RpmInspector, inspect_file,
    error::{Result, RpmError},
    models::{HeaderSection, IndexEntry, Lead, SectionKind, TypeTag},
};
