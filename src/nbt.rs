//! Reading and writing whole trees.
//!
//! A root tag is written as its type byte, its name, then its payload. A
//! buffer may hold several roots back to back; see [`from_bytes_multiple`].
//!
//! ```
//! use nbt_tree::{nbt, stream::{Mode, Options}, CompoundTag, NamedTag, Value};
//!
//! # fn main() -> nbt_tree::error::Result<()> {
//! let mut root = CompoundTag::named("", [NamedTag::new("DataVersion", 3120)]);
//!
//! let options = Options::network();
//! let bytes = nbt::to_bytes(&mut root, options, Mode::Network)?;
//! let back = nbt::from_bytes(&bytes, options, Mode::Network)?;
//!
//! let compound = back.value().as_compound().unwrap();
//! assert_eq!(compound.get("DataVersion"), Some(&Value::Int(3120)));
//! # Ok(())
//! # }
//! ```

use std::io::Write;

use crate::{
    error::{Error, Result},
    stream::{Mode, Options, Reader, Writer},
    NamedTag, Tag, Value,
};

/// Read one named tag. At the end of the input, or on an `End` byte, this
/// gives an unnamed [`Value::End`] tag.
pub fn read_tag(r: &mut Reader<'_>, mode: Mode) -> Result<NamedTag> {
    if r.is_eof() {
        return Ok(NamedTag::unnamed(Value::End));
    }

    let raw = r.get_byte()?;
    let tag = Tag::try_from(raw).map_err(|_| Error::invalid_tag(raw))?;
    if tag == Tag::End {
        return Ok(NamedTag::unnamed(Value::End));
    }

    let name = r.get_string(mode)?;
    let value = Value::read(tag, r, mode)?;
    Ok(NamedTag::new(name, value))
}

/// Write one named tag. An `End` tag is just its type byte.
pub fn write_tag<W: Write>(w: &mut Writer<W>, tag: &mut NamedTag, mode: Mode) -> Result<()> {
    w.put_byte(tag.tag().into())?;
    if tag.tag() == Tag::End {
        return Ok(());
    }

    w.put_string(tag.name(), mode)?;
    tag.value_mut().write(w, mode)
}

/// Read the first root tag in `bytes`. Trailing bytes are ignored.
pub fn from_bytes(bytes: &[u8], options: Options, mode: Mode) -> Result<NamedTag> {
    let mut r = Reader::new(bytes, options);
    read_tag(&mut r, mode)
}

/// Read root tags until the input is used up.
pub fn from_bytes_multiple(bytes: &[u8], options: Options, mode: Mode) -> Result<Vec<NamedTag>> {
    let mut r = Reader::new(bytes, options);
    let mut tags = vec![];
    while !r.is_eof() {
        tags.push(read_tag(&mut r, mode)?);
    }
    Ok(tags)
}

/// Encode a root tag. Untyped lists in the tree settle their element type
/// as they are written, hence `&mut`.
pub fn to_bytes(tag: &mut NamedTag, options: Options, mode: Mode) -> Result<Vec<u8>> {
    let mut w = Writer::new(vec![], options);
    write_tag(&mut w, tag, mode)?;
    Ok(w.into_inner())
}

pub fn to_bytes_multiple(tags: &mut [NamedTag], options: Options, mode: Mode) -> Result<Vec<u8>> {
    let mut w = Writer::new(vec![], options);
    for tag in tags.iter_mut() {
        write_tag(&mut w, tag, mode)?;
    }
    Ok(w.into_inner())
}
