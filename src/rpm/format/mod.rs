//! File format decoding layer for RPM package archives.
//!
//! This module provides the structure decoders that bridge between raw
//! file I/O and the high-level [`RpmInspector`](crate::rpm::inspector::RpmInspector).
//!
//! # Module Organization
//!
//! - [`lead`]: Decodes the fixed 96-byte lead record
//! - [`header`]: Decodes one header section (prologue, index table, data store)
//! - [`values`]: Renders individual values according to their wire type
//!
//! # Architecture
//!
//! ```text
//! Archive Structure:
//! ┌──────────────────┐
//! │  Lead (96 bytes) │ ← lead::decode()
//! ├──────────────────┤
//! │  Signature       │ ← header::decode(),
//! │  section         │   values::render() per entry
//! ├──────────────────┤
//! │  Pad to 8-byte   │ ← skipped by the inspector
//! │  boundary        │
//! ├──────────────────┤
//! │  Header section  │ ← header::decode(),
//! │                  │   values::render() per entry
//! └──────────────────┘
//! ```

pub mod header;
pub mod lead;
pub mod values;
