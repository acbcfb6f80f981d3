//! Core data structures for RPM archive components.
//!
//! This module defines the fundamental types used throughout the library:
//! - The lead record and header-section summaries
//! - Index entry metadata
//! - Wire type and section enumerations

/// The fixed 96-byte record at the start of every RPM archive.
///
/// Identifies the format version, package type, and package name. Modern
/// archives keep the lead for compatibility only; the authoritative
/// metadata lives in the header sections.
#[derive(Debug)]
pub struct Lead {
    pub major: u8,
    pub minor: u8,
    /// Wire field `type`: 0 = binary package, 1 = source package.
    pub package_type: i16,
    pub archnum: i16,
    /// Package name: the bytes of the 66-byte name field before the first
    /// NUL (the whole field if no NUL is present), decoded as UTF-8.
    pub name: String,
    pub osnum: i16,
    pub signature_type: i16,
}

impl Lead {
    /// Human-readable label for the package type.
    pub fn type_label(&self) -> &'static str {
        match self.package_type {
            0 => "binary",
            1 => "source",
            _ => "unknown",
        }
    }
}

/// Summary of one decoded header section.
///
/// Entry values are rendered while the index table is scanned and are not
/// retained; this records the section geometry and the entry metadata.
#[derive(Debug)]
pub struct HeaderSection {
    pub kind: SectionKind,
    pub version: u8,
    pub index_count: u32,
    pub data_size: u32,
    /// Absolute position of the data store: the prologue end plus
    /// `index_count` 16-byte entries.
    pub store_start: u64,
    pub entries: Vec<IndexEntry>,
    /// Whether the cursor sat at end-of-stream after skipping the store.
    pub at_end: bool,
}

/// A single 16-byte entry from a header section's index table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    pub tag: u32,
    pub type_code: u32,
    /// Byte offset of the value, relative to the data store start.
    pub offset: u32,
    pub count: u32,
}

impl IndexEntry {
    /// The wire type of this entry, or `None` for an out-of-range code.
    pub fn type_tag(&self) -> Option<TypeTag> {
        TypeTag::from_wire(self.type_code)
    }
}

/// Wire type tags for header-section values.
///
/// The numeric codes 0 through 9 are fixed by the format. A code outside
/// that range is not an error: the entry is still reported, with an
/// `(unknown)` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    Null,
    Char,
    Int8,
    Int16,
    Int32,
    Int64,
    String,
    Bin,
    StringArray,
    I18nString,
}

impl TypeTag {
    /// Maps a wire type code to its tag. Returns `None` for codes above 9.
    pub fn from_wire(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Null),
            1 => Some(Self::Char),
            2 => Some(Self::Int8),
            3 => Some(Self::Int16),
            4 => Some(Self::Int32),
            5 => Some(Self::Int64),
            6 => Some(Self::String),
            7 => Some(Self::Bin),
            8 => Some(Self::StringArray),
            9 => Some(Self::I18nString),
            _ => None,
        }
    }

    /// The format's name for this type, as printed in entry lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Char => "CHAR",
            Self::Int8 => "INT8",
            Self::Int16 => "INT16",
            Self::Int32 => "INT32",
            Self::Int64 => "INT64",
            Self::String => "STRING",
            Self::Bin => "BIN",
            Self::StringArray => "STRING_ARRAY",
            Self::I18nString => "I18NSTRING",
        }
    }
}

/// Which of the two header sections is being decoded.
///
/// Both sections share one layout; the kind selects the report title and
/// log wording only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Signature,
    Header,
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SectionKind::Signature => write!(f, "signature header"),
            SectionKind::Header => write!(f, "header"),
        }
    }
}
