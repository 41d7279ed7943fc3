//! Byte level codec shared by every tag.
//!
//! [`Reader`] is a cursor over a byte slice and [`Writer`] wraps anything
//! implementing [`std::io::Write`]. Both are configured with [`Options`]
//! for the byte order and string encoding, and every integer or length
//! they handle takes a [`Mode`].
//!
//! In [`Mode::File`] ints and lengths are fixed width and string lengths
//! are 2 byte unsigned shorts. In [`Mode::Network`] ints and lengths are
//! zig-zag VarInts and string lengths are unsigned VarInts. Shorts, longs,
//! floats, doubles and the elements of int arrays are fixed width in both
//! modes.

mod reader;
mod varint;
mod writer;

pub use reader::{Reader, MAX_DEPTH};
pub use writer::Writer;

/// Selects the integer and length encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Fixed width 4 byte ints, as used for files on disk.
    #[default]
    File,
    /// Variable length ints, as used on the network wire.
    Network,
}

/// Byte order of fixed width values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    #[default]
    Big,
    Little,
}

/// How string bytes are decoded and encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringEncoding {
    /// Java's modified UTF-8 (CESU-8 with encoded nulls).
    #[default]
    JavaCesu8,
    /// Plain UTF-8.
    Utf8,
}

/// Codec configuration shared by a [`Reader`] or [`Writer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub endian: Endian,
    pub strings: StringEncoding,
}

impl Options {
    /// Big endian with Java strings. Same as `Options::default()`.
    pub fn java() -> Self {
        Self::default()
    }

    /// Little endian with UTF-8 strings, the flavour that accompanies
    /// [`Mode::Network`] on the wire.
    pub fn network() -> Self {
        Self {
            endian: Endian::Little,
            strings: StringEncoding::Utf8,
        }
    }

    pub fn with_endian(mut self, endian: Endian) -> Self {
        self.endian = endian;
        self
    }

    pub fn with_strings(mut self, strings: StringEncoding) -> Self {
        self.strings = strings;
        self
    }
}
