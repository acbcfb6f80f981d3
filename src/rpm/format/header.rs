//! Header section decoding.
//!
//! A header section is a prologue, an index-entry table, and a data store:
//!
//! ```text
//! [3 bytes]  Magic 8E AD E8
//! [1 byte]   Section format version
//! [4 bytes]  Reserved
//! [4 bytes]  Index entry count (big-endian u32)
//! [4 bytes]  Data store size in bytes (big-endian u32)
//! [16 bytes x index_count]  Index entries (tag, type, offset, count)
//! [data_size bytes]         Data store, addressed by entry offsets
//! ```
//!
//! An archive carries two sections with this one layout: the signature
//! section, padded to an 8-byte boundary, then the header proper.

use std::io::{Read, Seek, SeekFrom, Write};

use byteorder::{BigEndian, ReadBytesExt};
use log::{debug, info, trace};

use crate::rpm::error::Result;
use crate::rpm::format::values;
use crate::rpm::models::{HeaderSection, IndexEntry, SectionKind};
use crate::rpm::utils;

/// The header section magic number.
pub const MAGIC: [u8; 3] = [0x8E, 0xAD, 0xE8];

/// Size of the section prologue in bytes.
pub const PROLOGUE_SIZE: usize = 16;

/// Size of one index entry in bytes.
pub const ENTRY_SIZE: u64 = 16;

/// Decodes one header section and renders it to the sink.
///
/// On return the cursor sits just past the section's data store (or at
/// end-of-stream when the store runs to the end). Each entry's value is
/// visited with a save/seek/render/restore round trip, so the index-table
/// scan itself never observes a displaced cursor.
///
/// # Errors
/// Returns an error if:
/// - The prologue or any index entry is truncated (I/O error)
/// - The prologue carries the wrong magic
/// - A value read runs past end-of-stream
pub fn decode<R: Read + Seek, W: Write>(
    reader: &mut R,
    out: &mut W,
    kind: SectionKind,
) -> Result<HeaderSection> {
    info!("Decoding {} section", kind);

    let mut prologue = [0u8; PROLOGUE_SIZE];
    reader.read_exact(&mut prologue)?;
    utils::check_magic(&prologue, &MAGIC, "header")?;

    let version = prologue[3];
    let index_count = utils::decode_be(&prologue[8..12]) as u32;
    let data_size = utils::decode_be(&prologue[12..16]) as u32;
    let store_start = reader.stream_position()? + u64::from(index_count) * ENTRY_SIZE;
    debug!(
        "{} section: version={}, index_count={}, data_size={}, store at {}",
        kind, version, index_count, data_size, store_start
    );

    writeln!(out, "{}:", kind)?;
    writeln!(out, "  version: {}", version)?;
    writeln!(out, "  index_count: {}", index_count)?;
    writeln!(out, "  data_size: {}", data_size)?;

    let mut entries = Vec::with_capacity(index_count as usize);
    for _ in 0..index_count {
        let entry = read_entry(reader)?;
        render_entry(reader, out, &entry, store_start)?;
        entries.push(entry);
    }

    // Skip the data store by its declared length.
    reader.seek(SeekFrom::Start(store_start + u64::from(data_size)))?;
    let at_end = probe_end(reader)?;
    trace!("{} section complete, at_end={}", kind, at_end);

    Ok(HeaderSection {
        kind,
        version,
        index_count,
        data_size,
        store_start,
        entries,
        at_end,
    })
}

/// Reads one 16-byte index entry from the table.
fn read_entry<R: Read>(reader: &mut R) -> Result<IndexEntry> {
    let tag = reader.read_u32::<BigEndian>()?;
    let type_code = reader.read_u32::<BigEndian>()?;
    let offset = reader.read_u32::<BigEndian>()?;
    let count = reader.read_u32::<BigEndian>()?;
    Ok(IndexEntry {
        tag,
        type_code,
        offset,
        count,
    })
}

/// Renders one entry line, visiting the entry's value in the data store.
///
/// The table cursor is saved before the seek to the value and restored
/// afterwards, before any render error propagates.
fn render_entry<R: Read + Seek, W: Write>(
    reader: &mut R,
    out: &mut W,
    entry: &IndexEntry,
    store_start: u64,
) -> Result<()> {
    let tag = entry.type_tag();
    let type_name = tag.map_or("unknown", |t| t.name());
    trace!(
        "Entry: tag={}, type={} ({}), offset={}, count={}",
        entry.tag, entry.type_code, type_name, entry.offset, entry.count
    );
    write!(out, "  tag: {}, type: {}, value: ", entry.tag, type_name)?;

    let saved = reader.stream_position()?;
    reader.seek(SeekFrom::Start(store_start + u64::from(entry.offset)))?;
    let rendered = values::render(reader, out, tag, entry.count);
    reader.seek(SeekFrom::Start(saved))?;
    rendered?;

    writeln!(out)?;
    Ok(())
}

/// Reports whether the cursor sits at end-of-stream, without consuming.
fn probe_end<R: Seek>(reader: &mut R) -> Result<bool> {
    let pos = reader.stream_position()?;
    let len = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(pos))?;
    Ok(pos >= len)
}
