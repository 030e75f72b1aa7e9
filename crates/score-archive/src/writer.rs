//! Streaming pretty-printed JSON emitter.

use std::io::Write;

use crate::error::ArchiveError;

const INDENT: &[u8] = b"  ";

enum Scope {
    Object { members: usize },
    Array { elements: usize },
}

/// Incremental JSON text writer with stable two-space indentation.
///
/// One member or element per line, `{}`/`[]` for empty containers. The
/// scope stack places commas and indentation and rejects the two
/// structurally invalid emissions: a named member inside an array and an
/// unnamed value directly inside an object.
pub(crate) struct PrettyWriter<W: Write> {
    out: W,
    scopes: Vec<Scope>,
    pending_key: bool,
}

impl<W: Write> PrettyWriter<W> {
    pub(crate) fn new(out: W) -> Self {
        PrettyWriter {
            out,
            scopes: Vec::new(),
            pending_key: false,
        }
    }

    pub(crate) fn begin_object(&mut self) -> Result<(), ArchiveError> {
        self.before_value()?;
        self.out.write_all(b"{")?;
        self.scopes.push(Scope::Object { members: 0 });
        Ok(())
    }

    pub(crate) fn end_object(&mut self) -> Result<(), ArchiveError> {
        match self.scopes.pop() {
            Some(Scope::Object { members }) => {
                if members > 0 {
                    self.newline_indent()?;
                }
                self.out.write_all(b"}")?;
                Ok(())
            }
            _ => unreachable!("no object scope open"),
        }
    }

    pub(crate) fn begin_array(&mut self) -> Result<(), ArchiveError> {
        self.before_value()?;
        self.out.write_all(b"[")?;
        self.scopes.push(Scope::Array { elements: 0 });
        Ok(())
    }

    pub(crate) fn end_array(&mut self) -> Result<(), ArchiveError> {
        match self.scopes.pop() {
            Some(Scope::Array { elements }) => {
                if elements > 0 {
                    self.newline_indent()?;
                }
                self.out.write_all(b"]")?;
                Ok(())
            }
            _ => unreachable!("no array scope open"),
        }
    }

    /// Writes the name of the next member of the current object.
    pub(crate) fn key(&mut self, name: &str) -> Result<(), ArchiveError> {
        let first = match self.scopes.last_mut() {
            Some(Scope::Object { members }) => {
                let first = *members == 0;
                *members += 1;
                first
            }
            Some(Scope::Array { .. }) => return Err(ArchiveError::NameInsideArray),
            None => unreachable!("no scope open"),
        };
        if !first {
            self.out.write_all(b",")?;
        }
        self.newline_indent()?;
        self.write_escaped(name)?;
        self.out.write_all(b": ")?;
        self.pending_key = true;
        Ok(())
    }

    pub(crate) fn null(&mut self) -> Result<(), ArchiveError> {
        self.before_value()?;
        self.out.write_all(b"null")?;
        Ok(())
    }

    pub(crate) fn bool(&mut self, value: bool) -> Result<(), ArchiveError> {
        self.before_value()?;
        self.out.write_all(if value { b"true" } else { b"false" })?;
        Ok(())
    }

    pub(crate) fn int(&mut self, value: i64) -> Result<(), ArchiveError> {
        self.before_value()?;
        write!(self.out, "{value}")?;
        Ok(())
    }

    pub(crate) fn uint(&mut self, value: u64) -> Result<(), ArchiveError> {
        self.before_value()?;
        write!(self.out, "{value}")?;
        Ok(())
    }

    pub(crate) fn str(&mut self, value: &str) -> Result<(), ArchiveError> {
        self.before_value()?;
        self.write_escaped(value)
    }

    /// Trailing newline, flush, and hand the stream back.
    pub(crate) fn finish(mut self) -> Result<W, ArchiveError> {
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(self.out)
    }

    fn before_value(&mut self) -> Result<(), ArchiveError> {
        if self.pending_key {
            self.pending_key = false;
            return Ok(());
        }
        let first = match self.scopes.last_mut() {
            Some(Scope::Array { elements }) => {
                let first = *elements == 0;
                *elements += 1;
                first
            }
            Some(Scope::Object { .. }) => return Err(ArchiveError::UnnamedValue),
            None => return Ok(()),
        };
        if !first {
            self.out.write_all(b",")?;
        }
        self.newline_indent()
    }

    fn newline_indent(&mut self) -> Result<(), ArchiveError> {
        self.out.write_all(b"\n")?;
        for _ in 0..self.scopes.len() {
            self.out.write_all(INDENT)?;
        }
        Ok(())
    }

    fn write_escaped(&mut self, text: &str) -> Result<(), ArchiveError> {
        self.out.write_all(b"\"")?;
        for ch in text.chars() {
            match ch {
                '"' => self.out.write_all(b"\\\"")?,
                '\\' => self.out.write_all(b"\\\\")?,
                '\n' => self.out.write_all(b"\\n")?,
                '\r' => self.out.write_all(b"\\r")?,
                '\t' => self.out.write_all(b"\\t")?,
                '\u{08}' => self.out.write_all(b"\\b")?,
                '\u{0c}' => self.out.write_all(b"\\f")?,
                ch if (ch as u32) < 0x20 => write!(self.out, "\\u{:04x}", ch as u32)?,
                ch => {
                    let mut utf8 = [0u8; 4];
                    self.out.write_all(ch.encode_utf8(&mut utf8).as_bytes())?;
                }
            }
        }
        self.out.write_all(b"\"")?;
        Ok(())
    }
}
