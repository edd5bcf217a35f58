//! GUID codec.
//!
//! GPT stores identifiers in mixed-endian order: the first three fields
//! are little endian, the trailing eight bytes are kept as-is. [`Guid`]
//! keeps the on-disk bytes and converts to [`uuid::Uuid`] field by field.

use std::fmt;
use std::str::FromStr;

use simple_bytes::{Bytes, BytesArray, BytesRead, BytesWrite};
use uuid::Uuid;

use crate::partition_types;
use crate::DumpError;

/// Length of an on-disk GUID (bytes).
pub const GUID_LEN: usize = 16;

/// A 128-bit identifier as stored on disk.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct Guid([u8; GUID_LEN]);

impl Guid {
    /// The all-zero identifier.
    pub const ZERO: Guid = Guid([0; GUID_LEN]);

    /// Wrap raw on-disk bytes.
    pub const fn from_bytes(bytes: [u8; GUID_LEN]) -> Self {
        Self(bytes)
    }

    /// Copy an identifier out of a buffer holding exactly 16 bytes.
    pub fn from_slice(buf: &[u8]) -> Result<Self, DumpError> {
        let bytes = <[u8; GUID_LEN]>::try_from(buf)
            .map_err(|_| DumpError::IdentifierRender { len: buf.len() })?;
        Ok(Self(bytes))
    }

    /// Encode a [`Uuid`] into on-disk byte order.
    pub fn from_uuid(uuid: &Uuid) -> Self {
        let (d1, d2, d3, d4) = uuid.as_fields();
        let mut bytes = BytesArray::from([0u8; GUID_LEN]);

        bytes.write_le_u32(d1);
        bytes.write_le_u16(d2);
        bytes.write_le_u16(d3);
        BytesWrite::write(&mut bytes, d4);

        Self(bytes.into_array())
    }

    /// The raw on-disk bytes.
    pub fn as_bytes(&self) -> &[u8; GUID_LEN] {
        &self.0
    }

    /// Whether every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Decode the mixed-endian fields into a [`Uuid`].
    pub fn to_uuid(&self) -> Uuid {
        let mut bytes = Bytes::from(&self.0[..]);

        let d1 = bytes.read_le_u32();
        let d2 = bytes.read_le_u16();
        let d3 = bytes.read_le_u16();
        let mut d4 = [0u8; 8];
        d4.copy_from_slice(bytes.read(8));

        Uuid::from_fields(d1, d2, d3, &d4)
    }

    /// The symbolic name when `resolve_symbols` is set and the identifier
    /// is a known partition type, the canonical rendering otherwise.
    pub fn describe(&self, resolve_symbols: bool) -> String {
        if resolve_symbols {
            if let Some(name) = resolve_known(self) {
                return name.to_string();
            }
        }
        self.to_string()
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Uuid::encode_buffer();
        f.pad(self.to_uuid().hyphenated().encode_lower(&mut buf))
    }
}

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guid({self})")
    }
}

impl FromStr for Guid {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(|u| Self::from_uuid(&u))
    }
}

/// Render on-disk identifier bytes as the canonical 8-4-4-4-12 string.
pub fn render(buf: &[u8]) -> Result<String, DumpError> {
    Guid::from_slice(buf).map(|g| g.to_string())
}

/// Look a partition type identifier up in the table of well-known types.
pub fn resolve_known(guid: &Guid) -> Option<&'static str> {
    partition_types::Type::from_guid(&guid.to_uuid()).map(|t| t.desc)
}
