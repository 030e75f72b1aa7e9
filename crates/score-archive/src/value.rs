//! The closed set of wire types and the direction-polymorphic contract.
//!
//! [`Archive`] is implemented by both [`InputArchive`] and
//! [`OutputArchive`]; a record writes one [`Serializable::serialize`] body
//! and the archive decides whether each `field` call reads into or writes
//! from the referenced value. [`ArchiveValue`] is the dispatch surface: a
//! fixed set of types the engine knows how to move across the wire, each
//! with its decode and encode rule side by side.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::NaiveDate;

use crate::bitset::Bitset;
use crate::error::ArchiveError;
use crate::input::InputArchive;
use crate::output::OutputArchive;
use crate::version::FileVersion;

/// Dates are stored in ISO-8601 basic form, e.g. `"19691126"`.
const DATE_FORMAT: &str = "%Y%m%d";

/// One interface over both archive directions.
pub trait Archive {
    /// Schema version of the document being read or written.
    fn version(&self) -> FileVersion;

    /// Reads into or writes from `value` under the member name `name`.
    ///
    /// On read, the current member's name must equal `name`; a mismatch is
    /// a fatal structural error, not a skip. On write, `name` becomes the
    /// next member name. Only legal while the current scope is an object.
    fn field<T: ArchiveValue>(&mut self, name: &str, value: &mut T) -> Result<(), ArchiveError>;
}

/// A record that describes its own field sequence.
///
/// The one method body runs under both archive directions, so the field
/// order written for a given version is by construction the order expected
/// when reading that version. Version-gated fields must branch on
/// `version` identically in both directions, which the shared body
/// guarantees.
pub trait Serializable {
    fn serialize<A: Archive>(
        &mut self,
        archive: &mut A,
        version: FileVersion,
    ) -> Result<(), ArchiveError>;
}

/// A type the archives can move across the wire.
///
/// The set is closed and known at build time: primitives, strings, dates,
/// bitsets, optionals, sequences, fixed arrays, integer-keyed maps, and
/// (through [`archive_record!`](crate::archive_record) /
/// [`archive_enum!`](crate::archive_enum)) records and unit enums.
pub trait ArchiveValue {
    /// Decodes the node at the archive's current position into `self`.
    fn decode(&mut self, archive: &mut InputArchive<'_>) -> Result<(), ArchiveError>;

    /// Encodes `self` as the next value of the output stream. Never
    /// mutates; `&mut` only mirrors the decode direction so one
    /// `serialize` body serves both.
    fn encode<W: Write>(&mut self, archive: &mut OutputArchive<W>) -> Result<(), ArchiveError>;
}

impl ArchiveValue for bool {
    fn decode(&mut self, archive: &mut InputArchive<'_>) -> Result<(), ArchiveError> {
        *self = archive
            .current()?
            .as_bool()
            .ok_or(ArchiveError::TypeMismatch { expected: "boolean" })?;
        Ok(())
    }

    fn encode<W: Write>(&mut self, archive: &mut OutputArchive<W>) -> Result<(), ArchiveError> {
        archive.writer.bool(*self)
    }
}

impl ArchiveValue for i32 {
    fn decode(&mut self, archive: &mut InputArchive<'_>) -> Result<(), ArchiveError> {
        let wide = archive
            .current()?
            .as_i64()
            .ok_or(ArchiveError::TypeMismatch { expected: "integer" })?;
        *self = i32::try_from(wide).map_err(|_| ArchiveError::IntegerOverflow {
            value: i128::from(wide),
            target: "i32",
        })?;
        Ok(())
    }

    fn encode<W: Write>(&mut self, archive: &mut OutputArchive<W>) -> Result<(), ArchiveError> {
        archive.writer.int(i64::from(*self))
    }
}

impl ArchiveValue for u32 {
    fn decode(&mut self, archive: &mut InputArchive<'_>) -> Result<(), ArchiveError> {
        let wide = archive
            .current()?
            .as_u64()
            .ok_or(ArchiveError::TypeMismatch {
                expected: "unsigned integer",
            })?;
        *self = u32::try_from(wide).map_err(|_| ArchiveError::IntegerOverflow {
            value: i128::from(wide),
            target: "u32",
        })?;
        Ok(())
    }

    fn encode<W: Write>(&mut self, archive: &mut OutputArchive<W>) -> Result<(), ArchiveError> {
        archive.writer.uint(u64::from(*self))
    }
}

impl ArchiveValue for i8 {
    fn decode(&mut self, archive: &mut InputArchive<'_>) -> Result<(), ArchiveError> {
        let wide = archive
            .current()?
            .as_i64()
            .ok_or(ArchiveError::TypeMismatch { expected: "integer" })?;
        if wide > i64::from(i8::MAX) {
            return Err(ArchiveError::IntegerOverflow {
                value: i128::from(wide),
                target: "i8",
            });
        }
        // Only the upper bound is checked; values below i8::MIN wrap.
        *self = wide as i8;
        Ok(())
    }

    fn encode<W: Write>(&mut self, archive: &mut OutputArchive<W>) -> Result<(), ArchiveError> {
        archive.writer.int(i64::from(*self))
    }
}

impl ArchiveValue for u8 {
    fn decode(&mut self, archive: &mut InputArchive<'_>) -> Result<(), ArchiveError> {
        let wide = archive
            .current()?
            .as_u64()
            .ok_or(ArchiveError::TypeMismatch {
                expected: "unsigned integer",
            })?;
        if wide > u64::from(u8::MAX) {
            return Err(ArchiveError::IntegerOverflow {
                value: i128::from(wide),
                target: "u8",
            });
        }
        *self = wide as u8;
        Ok(())
    }

    fn encode<W: Write>(&mut self, archive: &mut OutputArchive<W>) -> Result<(), ArchiveError> {
        archive.writer.uint(u64::from(*self))
    }
}

impl ArchiveValue for String {
    fn decode(&mut self, archive: &mut InputArchive<'_>) -> Result<(), ArchiveError> {
        let text = archive
            .current()?
            .as_str()
            .ok_or(ArchiveError::TypeMismatch { expected: "string" })?;
        *self = text.to_owned();
        Ok(())
    }

    fn encode<W: Write>(&mut self, archive: &mut OutputArchive<W>) -> Result<(), ArchiveError> {
        archive.writer.str(self)
    }
}

impl ArchiveValue for NaiveDate {
    fn decode(&mut self, archive: &mut InputArchive<'_>) -> Result<(), ArchiveError> {
        let text = archive
            .current()?
            .as_str()
            .ok_or(ArchiveError::TypeMismatch {
                expected: "date string",
            })?;
        *self = NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| {
            ArchiveError::MalformedDate {
                text: text.to_owned(),
            }
        })?;
        Ok(())
    }

    fn encode<W: Write>(&mut self, archive: &mut OutputArchive<W>) -> Result<(), ArchiveError> {
        archive.writer.str(&self.format(DATE_FORMAT).to_string())
    }
}

impl<const N: usize> ArchiveValue for Bitset<N> {
    fn decode(&mut self, archive: &mut InputArchive<'_>) -> Result<(), ArchiveError> {
        let text = archive
            .current()?
            .as_str()
            .ok_or(ArchiveError::TypeMismatch {
                expected: "bitset string",
            })?;
        *self = text.parse()?;
        Ok(())
    }

    fn encode<W: Write>(&mut self, archive: &mut OutputArchive<W>) -> Result<(), ArchiveError> {
        archive.writer.str(&self.to_string())
    }
}

impl<T: ArchiveValue + Default> ArchiveValue for Option<T> {
    fn decode(&mut self, archive: &mut InputArchive<'_>) -> Result<(), ArchiveError> {
        if archive.current()?.is_null() {
            *self = None;
        } else {
            let mut value = T::default();
            value.decode(archive)?;
            *self = Some(value);
        }
        Ok(())
    }

    fn encode<W: Write>(&mut self, archive: &mut OutputArchive<W>) -> Result<(), ArchiveError> {
        match self {
            Some(value) => value.encode(archive),
            None => archive.writer.null(),
        }
    }
}

impl<T: ArchiveValue + Default> ArchiveValue for Vec<T> {
    fn decode(&mut self, archive: &mut InputArchive<'_>) -> Result<(), ArchiveError> {
        let elements = archive
            .current()?
            .as_array()
            .ok_or(ArchiveError::TypeMismatch { expected: "array" })?;
        archive.push_array(elements);
        self.clear();
        self.reserve(elements.len());
        for _ in 0..elements.len() {
            let mut element = T::default();
            element.decode(archive)?;
            archive.advance()?;
            self.push(element);
        }
        archive.pop();
        Ok(())
    }

    fn encode<W: Write>(&mut self, archive: &mut OutputArchive<W>) -> Result<(), ArchiveError> {
        archive.writer.begin_array()?;
        for element in self.iter_mut() {
            element.encode(archive)?;
        }
        archive.writer.end_array()
    }
}

// Fixed arrays are stored as objects whose member names are the decimal
// slot indices "0".."N-1", so each slot goes through the named field path.
impl<T: ArchiveValue, const N: usize> ArchiveValue for [T; N] {
    fn decode(&mut self, archive: &mut InputArchive<'_>) -> Result<(), ArchiveError> {
        let members = archive
            .current()?
            .as_object()
            .ok_or(ArchiveError::TypeMismatch { expected: "object" })?;
        archive.push_object(members);
        for (index, slot) in self.iter_mut().enumerate() {
            archive.field(&index.to_string(), slot)?;
        }
        archive.pop();
        Ok(())
    }

    fn encode<W: Write>(&mut self, archive: &mut OutputArchive<W>) -> Result<(), ArchiveError> {
        archive.writer.begin_object()?;
        for (index, slot) in self.iter_mut().enumerate() {
            archive.field(&index.to_string(), slot)?;
        }
        archive.writer.end_object()
    }
}

impl<V: ArchiveValue + Default> ArchiveValue for BTreeMap<i32, V> {
    fn decode(&mut self, archive: &mut InputArchive<'_>) -> Result<(), ArchiveError> {
        let members = archive
            .current()?
            .as_object()
            .ok_or(ArchiveError::TypeMismatch { expected: "object" })?;
        archive.push_object(members);
        self.clear();
        for _ in 0..members.len() {
            let name = archive
                .current_name()?
                .ok_or(ArchiveError::ScopeExhausted)?;
            let key: i32 = name.parse().map_err(|_| ArchiveError::KeyFormat {
                key: name.to_owned(),
            })?;
            let mut value = V::default();
            value.decode(archive)?;
            archive.advance()?;
            self.insert(key, value);
        }
        archive.pop();
        Ok(())
    }

    fn encode<W: Write>(&mut self, archive: &mut OutputArchive<W>) -> Result<(), ArchiveError> {
        archive.writer.begin_object()?;
        for (key, value) in self.iter_mut() {
            archive.field(&key.to_string(), value)?;
        }
        archive.writer.end_object()
    }
}

/// Implements [`ArchiveValue`] for a record type that implements
/// [`Serializable`]. Both directions wrap the record's `serialize` body in
/// an object scope.
#[macro_export]
macro_rules! archive_record {
    ($ty:ty) => {
        impl $crate::ArchiveValue for $ty {
            fn decode(
                &mut self,
                archive: &mut $crate::InputArchive<'_>,
            ) -> ::std::result::Result<(), $crate::ArchiveError> {
                archive.record(self)
            }

            fn encode<W: ::std::io::Write>(
                &mut self,
                archive: &mut $crate::OutputArchive<W>,
            ) -> ::std::result::Result<(), $crate::ArchiveError> {
                archive.record(self)
            }
        }
    };
}

/// Implements [`ArchiveValue`] for a unit enum. The wire form is the
/// variant's integer value; decoding a value that matches none of the
/// listed variants fails the load.
#[macro_export]
macro_rules! archive_enum {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::ArchiveValue for $ty {
            fn decode(
                &mut self,
                archive: &mut $crate::InputArchive<'_>,
            ) -> ::std::result::Result<(), $crate::ArchiveError> {
                let mut raw = 0i32;
                $crate::ArchiveValue::decode(&mut raw, archive)?;
                *self = match raw {
                    $(x if x == $ty::$variant as i32 => $ty::$variant,)+
                    other => {
                        return ::std::result::Result::Err(
                            $crate::ArchiveError::UnknownEnumValue {
                                value: other,
                                target: ::std::stringify!($ty),
                            },
                        )
                    }
                };
                ::std::result::Result::Ok(())
            }

            fn encode<W: ::std::io::Write>(
                &mut self,
                archive: &mut $crate::OutputArchive<W>,
            ) -> ::std::result::Result<(), $crate::ArchiveError> {
                let mut raw = *self as i32;
                $crate::ArchiveValue::encode(&mut raw, archive)
            }
        }
    };
}
