use std::borrow::Cow;

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use super::{varint, Endian, Mode, Options, StringEncoding};
use crate::error::{Error, Result};

/// How many lists and compounds may be nested inside one another when
/// reading.
pub const MAX_DEPTH: usize = 512;

/// Cursor over NBT bytes. Reading past the end of the data fails with an
/// [`UnexpectedEof`][crate::error::ErrorKind::UnexpectedEof] error and
/// leaves the cursor where it was.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
    depth: usize,
    options: Options,
}

macro_rules! fixed {
    ($(#[$meta:meta])* $name:ident, $ty:ty, $read:ident) => {
        $(#[$meta])*
        pub fn $name(&mut self) -> Result<$ty> {
            let bs = self.consume(std::mem::size_of::<$ty>())?;
            Ok(match self.options.endian {
                Endian::Big => BigEndian::$read(bs),
                Endian::Little => LittleEndian::$read(bs),
            })
        }
    };
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8], options: Options) -> Self {
        Self {
            data,
            pos: 0,
            depth: 0,
            options,
        }
    }

    pub fn options(&self) -> Options {
        self.options
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// True once every byte has been consumed.
    pub fn is_eof(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Run `f` one container level deeper. Fails with
    /// [`TooDeep`][crate::error::ErrorKind::TooDeep] once more than
    /// [`MAX_DEPTH`] levels are open.
    pub(crate) fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_DEPTH {
            return Err(Error::too_deep(MAX_DEPTH));
        }

        self.depth += 1;
        let res = f(self);
        self.depth -= 1;
        res
    }

    fn consume(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|end| *end <= self.data.len())
            .ok_or_else(Error::unexpected_eof)?;

        let bs = &self.data[self.pos..end];
        self.pos = end;
        Ok(bs)
    }

    pub fn get_byte(&mut self) -> Result<u8> {
        Ok(self.consume(1)?[0])
    }

    /// Take the next `n` bytes verbatim.
    pub fn get_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.consume(n)
    }

    fixed!(get_short, i16, read_i16);
    fixed!(get_unsigned_short, u16, read_u16);
    fixed!(
        /// A 4 byte int regardless of mode, as used by int array elements.
        get_fixed_int,
        i32,
        read_i32
    );
    fixed!(get_long, i64, read_i64);
    fixed!(get_float, f32, read_f32);
    fixed!(get_double, f64, read_f64);

    /// Int payloads and lengths. Zig-zag VarInt in network mode.
    pub fn get_int(&mut self, mode: Mode) -> Result<i32> {
        match mode {
            Mode::File => self.get_fixed_int(),
            Mode::Network => Ok(varint::zigzag_decode(self.get_unsigned_varint()?)),
        }
    }

    pub fn get_unsigned_varint(&mut self) -> Result<u32> {
        let start = self.pos;
        varint::read_unsigned(|| self.get_byte()).map_err(|e| {
            self.pos = start;
            e
        })
    }

    /// Length prefixed string.
    pub fn get_string(&mut self, mode: Mode) -> Result<String> {
        let start = self.pos;
        let len = match mode {
            Mode::File => self.get_unsigned_short()? as usize,
            Mode::Network => self.get_unsigned_varint()? as usize,
        };

        let bs = match self.consume(len) {
            Ok(bs) => bs,
            Err(e) => {
                self.pos = start;
                return Err(e);
            }
        };

        decode_string(bs, self.options.strings)
    }
}

fn decode_string(bs: &[u8], encoding: StringEncoding) -> Result<String> {
    let s = match encoding {
        StringEncoding::JavaCesu8 => {
            cesu8::from_java_cesu8(bs).map_err(|_| Error::nonunicode_string(bs))?
        }
        StringEncoding::Utf8 => {
            Cow::Borrowed(std::str::from_utf8(bs).map_err(|_| Error::nonunicode_string(bs))?)
        }
    };

    Ok(s.into_owned())
}
