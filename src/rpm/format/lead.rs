//! Lead record decoding.
//!
//! The lead is a fixed 96-byte structure at the start of the archive:
//!
//! ```text
//! [4 bytes]  Magic ED AB EE DB
//! [1 byte]   Major format version
//! [1 byte]   Minor format version
//! [2 bytes]  Package type (big-endian i16; 0 = binary, 1 = source)
//! [2 bytes]  Architecture number
//! [66 bytes] Package name (NUL-terminated)
//! [2 bytes]  OS number
//! [2 bytes]  Signature type
//! [16 bytes] Reserved
//! ```

use std::io::Read;

use log::{debug, info, trace};

use crate::rpm::error::Result;
use crate::rpm::models::Lead;
use crate::rpm::utils;

/// The lead magic number.
pub const MAGIC: [u8; 4] = [0xED, 0xAB, 0xEE, 0xDB];

/// Total size of the lead record in bytes.
pub const LEAD_SIZE: usize = 96;

/// Decodes the lead record from the start of an archive.
///
/// All 96 bytes are read in one operation; a short read is an I/O error.
/// Only the magic number is validated. Every two-byte field is decoded
/// big-endian and reinterpreted as signed, independent of host layout.
pub fn decode<R: Read>(reader: &mut R) -> Result<Lead> {
    info!("Decoding lead record");

    let mut buf = [0u8; LEAD_SIZE];
    reader.read_exact(&mut buf)?;
    utils::check_magic(&buf, &MAGIC, "lead")?;

    // Name is the prefix of the 66-byte field up to the first NUL.
    let name_field = &buf[10..76];
    let name_len = name_field
        .iter()
        .position(|&b| b == 0)
        .unwrap_or(name_field.len());
    let name = String::from_utf8_lossy(&name_field[..name_len]).into_owned();

    let lead = Lead {
        major: buf[4],
        minor: buf[5],
        package_type: utils::decode_be(&buf[6..8]) as u16 as i16,
        archnum: utils::decode_be(&buf[8..10]) as u16 as i16,
        name,
        osnum: utils::decode_be(&buf[76..78]) as u16 as i16,
        signature_type: utils::decode_be(&buf[78..80]) as u16 as i16,
    };

    debug!(
        "Lead: version {}.{}, type {} ({}), name '{}'",
        lead.major,
        lead.minor,
        lead.package_type,
        lead.type_label(),
        lead.name
    );
    trace!(
        "Lead fields: archnum={}, osnum={}, signature_type={}",
        lead.archnum, lead.osnum, lead.signature_type
    );

    Ok(lead)
}
