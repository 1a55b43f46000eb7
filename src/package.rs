//! ZIP packaging of emitted parts.
//!
//! ODT requires an uncompressed `mimetype` entry as the first member of the
//! archive; every other part is deflated. DOCX has no such entry.

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::error::Result;
use crate::export::{Format, XmlParts};

/// Write `parts` as a `format` container into `writer`.
///
/// Parts are written in path order, so the same parts always produce the
/// same member order.
pub fn write_package<W: Write + Seek>(parts: &XmlParts, format: Format, writer: W) -> Result<()> {
    let mut zip = ZipWriter::new(writer);

    // constant timestamp: archive bytes depend only on the parts
    let options = |method| {
        SimpleFileOptions::default()
            .compression_method(method)
            .last_modified_time(DateTime::default())
    };
    let stored = options(CompressionMethod::Stored);
    let deflated = options(CompressionMethod::Deflated);

    // mimetype must be first and uncompressed
    if let Some(mimetype) = format.mimetype_entry() {
        zip.start_file("mimetype", stored)?;
        zip.write_all(mimetype.as_bytes())?;
    }

    for (name, root) in parts.iter() {
        log::trace!("writing {name}");
        zip.start_file(name, deflated)?;
        root.write_to(&mut zip)?;
    }

    zip.finish()?;
    log::debug!("packaged {} part(s) as {format}", parts.len());
    Ok(())
}

/// Write `parts` to a new file at `path`.
pub fn write_package_to_path(
    parts: &XmlParts,
    format: Format,
    path: impl AsRef<Path>,
) -> Result<()> {
    let file = File::create(path)?;
    write_package(parts, format, file)
}
