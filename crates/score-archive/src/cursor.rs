//! Uniform traversal over object members and array elements.

use std::iter::Peekable;
use std::slice;

use serde_json::{map, Map, Value};

use crate::error::ArchiveError;

/// A positional handle over one node's children.
///
/// Objects iterate `(name, value)` members in document order; arrays
/// iterate unnamed elements. Everything else about the traversal (descent,
/// version threading, type dispatch) is shared, so the engine keeps a
/// stack of these instead of two parallel read paths.
pub(crate) enum Cursor<'doc> {
    Object(Peekable<map::Iter<'doc>>),
    Array(Peekable<slice::Iter<'doc, Value>>),
}

impl<'doc> Cursor<'doc> {
    pub(crate) fn over_object(members: &'doc Map<String, Value>) -> Self {
        Cursor::Object(members.iter().peekable())
    }

    pub(crate) fn over_array(elements: &'doc [Value]) -> Self {
        Cursor::Array(elements.iter().peekable())
    }

    /// Name of the current member, or `None` when the scope is exhausted.
    /// Array elements have no names; asking for one is a schema error.
    pub(crate) fn name(&mut self) -> Result<Option<&'doc str>, ArchiveError> {
        match self {
            Cursor::Object(members) => Ok(members.peek().map(|(name, _)| name.as_str())),
            Cursor::Array(_) => Err(ArchiveError::NameInsideArray),
        }
    }

    /// The node at the current position, or `None` when exhausted.
    pub(crate) fn value(&mut self) -> Option<&'doc Value> {
        match self {
            Cursor::Object(members) => members.peek().map(|(_, value)| *value),
            Cursor::Array(elements) => elements.peek().copied(),
        }
    }

    /// Moves the position forward by one.
    pub(crate) fn advance(&mut self) {
        match self {
            Cursor::Object(members) => {
                members.next();
            }
            Cursor::Array(elements) => {
                elements.next();
            }
        }
    }
}
