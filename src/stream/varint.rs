//! VarInts: 7 bits per byte, least significant group first, high bit set
//! on every byte but the last. Signed values are zig-zag mapped first so
//! that small negative numbers stay short.

use std::io::Write;

use crate::error::{Error, Result};

pub(crate) const MAX_VARINT_LEN: usize = 5;

const CONTINUE: u8 = 0x80;
const PAYLOAD: u8 = 0x7f;

pub(crate) fn zigzag_encode(v: i32) -> u32 {
    ((v << 1) ^ (v >> 31)) as u32
}

pub(crate) fn zigzag_decode(v: u32) -> i32 {
    ((v >> 1) as i32) ^ -((v & 1) as i32)
}

/// Decode an unsigned VarInt, pulling bytes from `next`.
pub(crate) fn read_unsigned<F>(mut next: F) -> Result<u32>
where
    F: FnMut() -> Result<u8>,
{
    let mut value = 0u32;
    for i in 0..MAX_VARINT_LEN {
        let b = next()?;
        value |= u32::from(b & PAYLOAD) << (7 * i);
        if b & CONTINUE == 0 {
            return Ok(value);
        }
    }

    Err(Error::varint_too_long())
}

pub(crate) fn write_unsigned<W: Write>(w: &mut W, mut v: u32) -> Result<()> {
    let mut buf = [0u8; MAX_VARINT_LEN];
    let mut len = 0;
    loop {
        if v & !u32::from(PAYLOAD) == 0 {
            buf[len] = v as u8;
            len += 1;
            break;
        }
        buf[len] = (v as u8 & PAYLOAD) | CONTINUE;
        len += 1;
        v >>= 7;
    }

    w.write_all(&buf[..len])?;
    Ok(())
}
