use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use log::{debug, info};

use crate::rpm::error::Result;
use crate::rpm::format::{header, lead};
use crate::rpm::models::SectionKind;

/// Drives a full structural scan of one archive.
///
/// Holds the byte source and the report sink. The stream cursor is the
/// only mutable state; a scan runs front to back in a single pass and
/// nothing persists between scans.
pub struct RpmInspector<R: Read + Seek, W: Write> {
    reader: R,
    out: W,
}

impl<R: Read + Seek, W: Write> RpmInspector<R, W> {
    /// Creates an inspector over a byte source and a report sink.
    pub fn new(reader: R, out: W) -> Self {
        Self { reader, out }
    }

    /// Scans the archive front to back: lead, signature section, alignment
    /// pad, header section. The report is rendered as the scan proceeds.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Any structure is truncated (I/O error)
    /// - The lead or a section prologue carries the wrong magic
    pub fn scan(&mut self) -> Result<()> {
        let lead = lead::decode(&mut self.reader)?;
        writeln!(self.out, "  major: {}", lead.major)?;
        writeln!(self.out, "  minor: {}", lead.minor)?;
        writeln!(self.out, "  type: {} ({})", lead.package_type, lead.type_label())?;
        writeln!(self.out, "  archnum: {}", lead.archnum)?;
        writeln!(self.out, "  name: {}", lead.name)?;
        writeln!(self.out, "  osnum: {}", lead.osnum)?;
        writeln!(self.out, "  signature_type: {}", lead.signature_type)?;

        let signature =
            header::decode(&mut self.reader, &mut self.out, SectionKind::Signature)?;

        // The signature store is padded to the next 8-byte boundary.
        let pos = self.reader.stream_position()?;
        let pad = 7 - (pos + 7) % 8;
        if pad > 0 {
            debug!("Skipping {} alignment pad bytes at {}", pad, pos);
            self.reader.seek(SeekFrom::Current(pad as i64))?;
        }

        let head = header::decode(&mut self.reader, &mut self.out, SectionKind::Header)?;
        info!(
            "Scan complete: {} signature entries, {} header entries, at_end={}",
            signature.index_count, head.index_count, head.at_end
        );
        Ok(())
    }
}

/// Opens and scans one archive file, writing the report to `out`.
///
/// The report begins with a `{path}:` heading once the file is open. Any
/// failure, the open included, comes back annotated with the file name.
pub fn inspect_file<W: Write>(path: impl AsRef<Path>, out: &mut W) -> Result<()> {
    let path = path.as_ref();
    info!("Inspecting archive: {}", path.display());
    scan_file(path, out).map_err(|e| e.with_filename(path.display().to_string()))
}

fn scan_file<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let file = File::open(path)?;
    writeln!(out, "{}:", path.display())?;
    RpmInspector::new(file, out).scan()
}
