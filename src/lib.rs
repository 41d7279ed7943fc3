//! nbt-tree reads, edits and writes NBT (Named Binary Tag) trees in both the
//! persistent file encoding and the network wire encoding.
//!
//! * For the tree types see [`NamedTag`], [`Value`], [`ListTag`] and
//!   [`CompoundTag`].
//! * For reading and writing whole trees see [`nbt`].
//! * For the byte level codec see [`stream`].
//!
//! # Lists
//!
//! A [`ListTag`] is an indexed sequence of unnamed tags that must all share
//! one type when written. An empty or freshly built list is *untyped*, its
//! element type is [`Tag::End`], and the type is inferred from the first
//! element the first time the list is written.
//!
//! ```
//! use nbt_tree::{nbt, stream::{Mode, Options}, ListTag, NamedTag, Value};
//!
//! # fn main() -> nbt_tree::error::Result<()> {
//! let mut list = ListTag::default();
//! list.set(0, NamedTag::new("", Value::Int(1)))?;
//! list.set(1, Value::Int(2))?;
//!
//! let root = NamedTag::new("numbers", Value::List(list));
//! let bytes = nbt::to_bytes(&mut root.clone(), Options::default(), Mode::File)?;
//!
//! let back = nbt::from_bytes(&bytes, Options::default(), Mode::File)?;
//! assert_eq!(back.name(), "numbers");
//! # Ok(())
//! # }
//! ```
//!
//! # File and network encodings
//!
//! Every read and write takes a [`stream::Mode`]. In [`Mode::File`] integers
//! and lengths are fixed 4 byte ints, in [`Mode::Network`] they are zig-zag
//! VarInts. The mode is threaded unchanged through the whole tree.
//!
//! [`Mode::File`]: stream::Mode::File
//! [`Mode::Network`]: stream::Mode::Network

pub mod error;
pub mod nbt;
pub mod stream;

mod compound;
mod list;
mod value;

pub use compound::*;
pub use list::*;
pub use value::*;

#[cfg(test)]
mod test;

/// An NBT tag. This does not carry the value or the name of the data.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object, and an untyped list.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of unnamed tags sharing one type.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
}

impl Tag {
    /// Containers support indexed or keyed access and counting.
    pub const fn is_container(self) -> bool {
        matches!(self, Tag::List | Tag::Compound)
    }

    /// The conventional `TAG_*` name used when printing trees.
    pub const fn name(self) -> &'static str {
        match self {
            Tag::End => "TAG_End",
            Tag::Byte => "TAG_Byte",
            Tag::Short => "TAG_Short",
            Tag::Int => "TAG_Int",
            Tag::Long => "TAG_Long",
            Tag::Float => "TAG_Float",
            Tag::Double => "TAG_Double",
            Tag::ByteArray => "TAG_Byte_Array",
            Tag::String => "TAG_String",
            Tag::List => "TAG_List",
            Tag::Compound => "TAG_Compound",
            Tag::IntArray => "TAG_Int_Array",
        }
    }
}

// The tag set is closed and very rarely changes, so we write the
// conversions out by hand rather than pull in a derive crate.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
