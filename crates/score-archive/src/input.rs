//! Decode direction: the reading archive and the `load` entry point.

use std::io::Read;

use serde_json::{Map, Value};

use crate::cursor::Cursor;
use crate::error::ArchiveError;
use crate::value::{Archive, ArchiveValue, Serializable};
use crate::version::{FileVersion, VERSION_FIELD};

/// The reading archive.
///
/// Borrows a fully parsed document for its whole lifetime and keeps the
/// traversal stack as an explicit field: one cursor frame per object or
/// array currently being visited, pushed on entry and popped on exit.
/// The root frame is pushed at construction, so the stack is never empty
/// while a field is being read. One archive performs one root visit and
/// is then discarded.
pub struct InputArchive<'doc> {
    version: FileVersion,
    frames: Vec<Cursor<'doc>>,
}

impl<'doc> InputArchive<'doc> {
    /// Opens an archive over a parsed document and validates its version.
    ///
    /// The document root must be an object whose first member is the
    /// schema version; the version gate runs here, before any field of a
    /// load target can be touched.
    pub fn new(document: &'doc Value) -> Result<Self, ArchiveError> {
        let root = document
            .as_object()
            .ok_or(ArchiveError::TypeMismatch { expected: "object" })?;
        let mut archive = InputArchive {
            version: FileVersion::INITIAL,
            frames: vec![Cursor::over_object(root)],
        };
        let mut raw = 0u32;
        archive.field(VERSION_FIELD, &mut raw)?;
        archive.version = FileVersion::validate(raw)?;
        Ok(archive)
    }

    /// Schema version declared by the document.
    pub fn version(&self) -> FileVersion {
        self.version
    }

    /// Decodes the record at the current position.
    ///
    /// Pushes an object frame at the node's first member, runs the
    /// record's `serialize` body, pops the frame.
    pub fn record<T: Serializable>(&mut self, record: &mut T) -> Result<(), ArchiveError> {
        let members = self
            .current()?
            .as_object()
            .ok_or(ArchiveError::TypeMismatch { expected: "object" })?;
        self.frames.push(Cursor::over_object(members));
        let version = self.version;
        record.serialize(self, version)?;
        self.frames.pop();
        Ok(())
    }

    /// The node at the current position of the top frame.
    pub(crate) fn current(&mut self) -> Result<&'doc Value, ArchiveError> {
        self.top()?.value().ok_or(ArchiveError::ScopeExhausted)
    }

    /// The member name at the current position, `None` when exhausted.
    pub(crate) fn current_name(&mut self) -> Result<Option<&'doc str>, ArchiveError> {
        self.top()?.name()
    }

    pub(crate) fn advance(&mut self) -> Result<(), ArchiveError> {
        self.top()?.advance();
        Ok(())
    }

    pub(crate) fn push_object(&mut self, members: &'doc Map<String, Value>) {
        self.frames.push(Cursor::over_object(members));
    }

    pub(crate) fn push_array(&mut self, elements: &'doc [Value]) {
        self.frames.push(Cursor::over_array(elements));
    }

    pub(crate) fn pop(&mut self) {
        self.frames.pop();
    }

    fn top(&mut self) -> Result<&mut Cursor<'doc>, ArchiveError> {
        self.frames.last_mut().ok_or(ArchiveError::ScopeExhausted)
    }
}

impl Archive for InputArchive<'_> {
    fn version(&self) -> FileVersion {
        self.version
    }

    fn field<T: ArchiveValue>(&mut self, name: &str, value: &mut T) -> Result<(), ArchiveError> {
        match self.current_name()? {
            Some(found) if found == name => {}
            found => {
                return Err(ArchiveError::UnexpectedField {
                    expected: name.to_owned(),
                    found: found.unwrap_or("end of object").to_owned(),
                })
            }
        }
        value.decode(self)?;
        self.advance()
    }
}

/// Reads one named root value from `input`.
///
/// Parses the whole stream, validates the schema version, then decodes
/// the member `name` into `object`. All-or-nothing: any structural,
/// numeric or version error aborts the load with `object` in an
/// unspecified but safe state, and nothing is ever silently defaulted.
pub fn load<R: Read, T: ArchiveValue>(
    input: R,
    name: &str,
    object: &mut T,
) -> Result<(), ArchiveError> {
    let document: Value = serde_json::from_reader(input)?;
    let mut archive = InputArchive::new(&document)?;
    archive.field(name, object)?;
    tracing::debug!(version = %archive.version(), root = name, "loaded document");
    Ok(())
}
