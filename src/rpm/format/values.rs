//! Value rendering for each wire type.
//!
//! The reader arrives positioned at the value's first byte inside the data
//! store; each renderer consumes exactly the bytes its type and count call
//! for and writes the rendered text to the sink. Out-of-range type codes
//! consume nothing.

use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt};
use log::trace;

use crate::rpm::error::Result;
use crate::rpm::models::TypeTag;

/// Renders one value of the given type.
///
/// `tag` is `None` for an out-of-range wire code; such entries render as
/// the literal `(unknown)` without touching the reader, so the scan of the
/// remaining entries continues undisturbed.
pub fn render<R: Read, W: Write>(
    reader: &mut R,
    out: &mut W,
    tag: Option<TypeTag>,
    count: u32,
) -> Result<()> {
    let Some(tag) = tag else {
        write!(out, "(unknown)")?;
        return Ok(());
    };
    trace!("Rendering {} value, count={}", tag.name(), count);

    match tag {
        TypeTag::Null => Ok(()),
        TypeTag::Char => render_chars(reader, out, count),
        TypeTag::Int8 => render_ints(reader, out, count, |r| r.read_i8().map(i64::from)),
        TypeTag::Int16 => {
            render_ints(reader, out, count, |r| r.read_i16::<BigEndian>().map(i64::from))
        }
        TypeTag::Int32 => {
            render_ints(reader, out, count, |r| r.read_i32::<BigEndian>().map(i64::from))
        }
        TypeTag::Int64 => render_ints(reader, out, count, |r| r.read_i64::<BigEndian>()),
        TypeTag::String => render_string(reader, out),
        TypeTag::Bin => render_bin(reader, out, count),
        TypeTag::StringArray | TypeTag::I18nString => render_string_array(reader, out, count),
    }
}

/// Renders `count` single-byte characters, each quoted as `'c'`.
fn render_chars<R: Read, W: Write>(reader: &mut R, out: &mut W, count: u32) -> Result<()> {
    let braced = count > 1;
    if braced {
        write!(out, "{{")?;
    }
    for i in 0..count {
        if i > 0 {
            write!(out, ", ")?;
        }
        let byte = reader.read_u8()?;
        write!(out, "'")?;
        write_escaped(out, byte)?;
        write!(out, "'")?;
    }
    if braced {
        write!(out, "}}")?;
    }
    Ok(())
}

/// Renders `count` big-endian signed integers in decimal.
///
/// The scalar width is fixed by `read_one`, so a single renderer serves
/// all four integer types.
fn render_ints<R, W, F>(reader: &mut R, out: &mut W, count: u32, read_one: F) -> Result<()>
where
    R: Read,
    W: Write,
    F: Fn(&mut R) -> std::io::Result<i64>,
{
    let braced = count > 1;
    if braced {
        write!(out, "{{")?;
    }
    for i in 0..count {
        if i > 0 {
            write!(out, ", ")?;
        }
        let value = read_one(reader)?;
        write!(out, "{}", value)?;
    }
    if braced {
        write!(out, "}}")?;
    }
    Ok(())
}

/// Renders one NUL-terminated string, double-quoted.
///
/// The entry count is not consulted: a STRING value is always a single
/// string, whatever its count field says.
fn render_string<R: Read, W: Write>(reader: &mut R, out: &mut W) -> Result<()> {
    write!(out, "\"")?;
    loop {
        let byte = reader.read_u8()?;
        if byte == 0 {
            break;
        }
        write_escaped(out, byte)?;
    }
    write!(out, "\"")?;
    Ok(())
}

/// Renders `count` bytes as space-separated uppercase hex pairs.
/// A zero count renders nothing at all.
fn render_bin<R: Read, W: Write>(reader: &mut R, out: &mut W, count: u32) -> Result<()> {
    let mut byte = [0u8; 1];
    for i in 0..count {
        if i > 0 {
            write!(out, " ")?;
        }
        reader.read_exact(&mut byte)?;
        write!(out, "{}", hex::encode_upper(byte))?;
    }
    Ok(())
}

/// Renders `count` NUL-terminated strings as a braced, quoted list.
///
/// Unlike the scalar types, the braces appear even for a single element,
/// and a zero count renders the empty list `{}`.
fn render_string_array<R: Read, W: Write>(reader: &mut R, out: &mut W, count: u32) -> Result<()> {
    write!(out, "{{")?;
    for i in 0..count {
        if i > 0 {
            write!(out, ", ")?;
        }
        render_string(reader, out)?;
    }
    write!(out, "}}")?;
    Ok(())
}

/// Writes one byte using C-style escapes.
///
/// Control characters with a short escape use it, printable ASCII passes
/// through unchanged, and everything else renders as backslash plus three
/// octal digits.
fn write_escaped<W: Write>(out: &mut W, byte: u8) -> Result<()> {
    match byte {
        0x00 => write!(out, "\\0")?,
        0x08 => write!(out, "\\b")?,
        0x0C => write!(out, "\\f")?,
        b'\n' => write!(out, "\\n")?,
        b'\r' => write!(out, "\\r")?,
        b'\t' => write!(out, "\\t")?,
        b'\\' => write!(out, "\\\\")?,
        b'\'' => write!(out, "\\'")?,
        b'"' => write!(out, "\\\"")?,
        0x20..=0x7E => write!(out, "{}", byte as char)?,
        _ => write!(out, "\\{:03o}", byte)?,
    }
    Ok(())
}
