use std::io::Write;

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};

use super::{varint, Endian, Mode, Options, StringEncoding};
use crate::error::{Error, Result};

/// Writes NBT primitives to any [`Write`].
#[derive(Debug)]
pub struct Writer<W: Write> {
    inner: W,
    options: Options,
}

macro_rules! fixed {
    ($(#[$meta:meta])* $name:ident, $ty:ty, $write:ident) => {
        $(#[$meta])*
        pub fn $name(&mut self, v: $ty) -> Result<()> {
            match self.options.endian {
                Endian::Big => self.inner.$write::<BigEndian>(v)?,
                Endian::Little => self.inner.$write::<LittleEndian>(v)?,
            }
            Ok(())
        }
    };
}

impl<W: Write> Writer<W> {
    pub fn new(inner: W, options: Options) -> Self {
        Self { inner, options }
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    pub fn put_byte(&mut self, b: u8) -> Result<()> {
        self.inner.write_u8(b)?;
        Ok(())
    }

    pub fn put_bytes(&mut self, bs: &[u8]) -> Result<()> {
        self.inner.write_all(bs)?;
        Ok(())
    }

    fixed!(put_short, i16, write_i16);
    fixed!(put_unsigned_short, u16, write_u16);
    fixed!(
        /// A 4 byte int regardless of mode, as used by int array elements.
        put_fixed_int,
        i32,
        write_i32
    );
    fixed!(put_long, i64, write_i64);
    fixed!(put_float, f32, write_f32);
    fixed!(put_double, f64, write_f64);

    /// Int payloads and lengths. Zig-zag VarInt in network mode.
    pub fn put_int(&mut self, v: i32, mode: Mode) -> Result<()> {
        match mode {
            Mode::File => self.put_fixed_int(v),
            Mode::Network => self.put_unsigned_varint(varint::zigzag_encode(v)),
        }
    }

    pub fn put_unsigned_varint(&mut self, v: u32) -> Result<()> {
        varint::write_unsigned(&mut self.inner, v)
    }

    /// Length of a list or array, written as an int.
    pub fn put_len(&mut self, len: usize, mode: Mode) -> Result<()> {
        let len: i32 = len
            .try_into()
            .map_err(|_| Error::bespoke("len too large".to_owned()))?;
        self.put_int(len, mode)
    }

    /// Length prefixed string.
    pub fn put_string(&mut self, s: &str, mode: Mode) -> Result<()> {
        let bs = match self.options.strings {
            StringEncoding::JavaCesu8 => cesu8::to_java_cesu8(s),
            StringEncoding::Utf8 => s.as_bytes().into(),
        };

        match mode {
            Mode::File => {
                let len: u16 = bs
                    .len()
                    .try_into()
                    .map_err(|_| Error::bespoke("string too long".to_owned()))?;
                self.put_unsigned_short(len)?;
            }
            Mode::Network => {
                let len: u32 = bs
                    .len()
                    .try_into()
                    .map_err(|_| Error::bespoke("string too long".to_owned()))?;
                self.put_unsigned_varint(len)?;
            }
        }

        self.put_bytes(&bs)
    }
}
