//! Contains the Error and Result type used when reading and writing NBT.
use std::fmt::Display;

use crate::Tag;

/// Various errors that can occur when reading, writing or modifying NBT.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Any other errors. Users should not match on this variant and should
    /// instead use a wildcard `_`.
    Other,

    /// Input ran out part way through a value.
    UnexpectedEof,

    /// A type byte that is not a known tag.
    InvalidTag(u8),

    /// Expected unicode data but was not valid. Contained bytes are the
    /// invalid data.
    Nonunicode(Vec<u8>),

    /// A list contained elements of more than one type when written.
    MixedList { expected: Tag, found: Tag },

    /// An in-place update tried to change the type of a tag.
    TypeMismatch { expected: Tag, found: Tag },

    /// A network VarInt did not terminate within 5 bytes.
    VarIntTooLong,

    /// Lists and compounds were nested deeper than the reader allows.
    TooDeep,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl serde::ser::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: Display,
    {
        Error::bespoke(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self {
                msg: format!("io error: {}", e),
                kind: ErrorKind::UnexpectedEof,
            },
            _ => Self {
                msg: format!("io error: {}", e),
                kind: ErrorKind::Other,
            },
        }
    }
}

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, ErrorKind::UnexpectedEof)
    }

    pub(crate) fn invalid_tag(tag: u8) -> Error {
        Error {
            msg: format!("invalid nbt tag value: {}", tag),
            kind: ErrorKind::InvalidTag(tag),
        }
    }

    pub(crate) fn nonunicode_string(data: &[u8]) -> Error {
        Error {
            msg: format!(
                "invalid nbt string: nonunicode: {}",
                String::from_utf8_lossy(data)
            ),
            kind: ErrorKind::Nonunicode(data.to_vec()),
        }
    }

    pub(crate) fn unexpected_eof() -> Error {
        Error {
            msg: "eof: unexpectedly ran out of input".to_owned(),
            kind: ErrorKind::UnexpectedEof,
        }
    }

    pub(crate) fn mixed_list(expected: Tag, found: Tag) -> Error {
        Error {
            msg: format!(
                "list elements must share one type: expected {:?}, found {:?}",
                expected, found
            ),
            kind: ErrorKind::MixedList { expected, found },
        }
    }

    pub(crate) fn type_mismatch(expected: Tag, found: Tag) -> Error {
        Error {
            msg: format!(
                "cannot update {:?} tag in place with a {:?} value",
                expected, found
            ),
            kind: ErrorKind::TypeMismatch { expected, found },
        }
    }

    pub(crate) fn varint_too_long() -> Error {
        Error {
            msg: "invalid varint: more than 5 bytes".to_owned(),
            kind: ErrorKind::VarIntTooLong,
        }
    }

    pub(crate) fn too_deep(limit: usize) -> Error {
        Error {
            msg: format!("nbt nested deeper than {} levels", limit),
            kind: ErrorKind::TooDeep,
        }
    }

    pub(crate) fn bespoke(msg: String) -> Error {
        Error {
            msg,
            kind: ErrorKind::Other,
        }
    }
}
