//! Encode direction: the writing archive and the `save` entry points.

use std::io::Write;

use crate::error::ArchiveError;
use crate::value::{Archive, ArchiveValue, Serializable};
use crate::version::{FileVersion, VERSION_FIELD};
use crate::writer::PrettyWriter;

/// The writing archive.
///
/// Streams pretty-printed JSON to `output` as fields arrive; nothing is
/// buffered into a tree first. The target version is fixed at
/// construction and written as the first member of the document, never
/// read back from the stream. One archive writes one root visit and must
/// be closed with [`finish`](OutputArchive::finish).
pub struct OutputArchive<W: Write> {
    pub(crate) writer: PrettyWriter<W>,
    version: FileVersion,
}

impl<W: Write> OutputArchive<W> {
    /// Opens the document and writes the version member.
    pub fn new(output: W, version: FileVersion) -> Result<Self, ArchiveError> {
        let mut writer = PrettyWriter::new(output);
        writer.begin_object()?;
        writer.key(VERSION_FIELD)?;
        writer.uint(u64::from(version.number()))?;
        Ok(OutputArchive { writer, version })
    }

    /// The version this archive writes.
    pub fn version(&self) -> FileVersion {
        self.version
    }

    /// Encodes a record at the current position: opens an object scope,
    /// runs the record's `serialize` body, closes the scope.
    pub fn record<T: Serializable>(&mut self, record: &mut T) -> Result<(), ArchiveError> {
        self.writer.begin_object()?;
        let version = self.version;
        record.serialize(self, version)?;
        self.writer.end_object()
    }

    /// Closes the root scope, writes the trailing newline, flushes, and
    /// hands the stream back. Finalization is explicit; dropping an
    /// unfinished archive leaves the document unterminated.
    pub fn finish(mut self) -> Result<W, ArchiveError> {
        self.writer.end_object()?;
        self.writer.finish()
    }
}

impl<W: Write> Archive for OutputArchive<W> {
    fn version(&self) -> FileVersion {
        self.version
    }

    fn field<T: ArchiveValue>(&mut self, name: &str, value: &mut T) -> Result<(), ArchiveError> {
        self.writer.key(name)?;
        value.encode(self)
    }
}

/// Writes one named root value to `output` at the latest version.
pub fn save<W: Write, T: ArchiveValue>(
    output: W,
    name: &str,
    object: &mut T,
) -> Result<(), ArchiveError> {
    save_with_version(output, FileVersion::LATEST, name, object)
}

/// Writes one named root value to `output` at an explicit version.
///
/// The record's `serialize` body sees `version` and must emit the field
/// set that version defines; readers of the produced document get the
/// same version and expect the same set.
pub fn save_with_version<W: Write, T: ArchiveValue>(
    output: W,
    version: FileVersion,
    name: &str,
    object: &mut T,
) -> Result<(), ArchiveError> {
    let mut archive = OutputArchive::new(output, version)?;
    archive.field(name, object)?;
    archive.finish()?;
    tracing::debug!(version = %version, root = name, "saved document");
    Ok(())
}
