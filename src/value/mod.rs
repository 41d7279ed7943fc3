mod fmt;
mod ser;

use std::io::Write;

use crate::{
    error::{Error, Result},
    stream::{Mode, Reader, Writer},
    CompoundTag, ListTag, Tag,
};

/// How [`ListTag::count`] and [`CompoundTag::count`] count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountMode {
    /// Top level elements only.
    #[default]
    Normal,
    /// Walk the elements, also stepping over nested containers' contents.
    /// See [`ListTag::count`] for how lists do this.
    Recursive,
}

/// The payload of an NBT tag. The variant decides the tag type, see
/// [`Value::tag`].
///
/// Lists and compounds own their children, so a `Value` is a complete
/// subtree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(ListTag),
    Compound(CompoundTag),
    IntArray(Vec<i32>),
}

impl Value {
    pub fn tag(&self) -> Tag {
        match self {
            Value::End => Tag::End,
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
            Value::IntArray(_) => Tag::IntArray,
        }
    }

    /// Read the payload of a tag of type `tag`. The type byte and any name
    /// must already have been consumed.
    ///
    /// Nested lists and compounds count against
    /// [`MAX_DEPTH`][crate::stream::MAX_DEPTH].
    pub fn read(tag: Tag, r: &mut Reader<'_>, mode: Mode) -> Result<Value> {
        Ok(match tag {
            Tag::End => Value::End,
            Tag::Byte => Value::Byte(r.get_byte()? as i8),
            Tag::Short => Value::Short(r.get_short()?),
            Tag::Int => Value::Int(r.get_int(mode)?),
            Tag::Long => Value::Long(r.get_long()?),
            Tag::Float => Value::Float(r.get_float()?),
            Tag::Double => Value::Double(r.get_double()?),
            Tag::ByteArray => {
                let len = read_array_len(r, mode, 1)?;
                Value::ByteArray(r.get_bytes(len)?.iter().map(|b| *b as i8).collect())
            }
            Tag::String => Value::String(r.get_string(mode)?),
            Tag::List => r.nested(|r| {
                let mut list = ListTag::default();
                list.read(r, mode)?;
                Ok(Value::List(list))
            })?,
            Tag::Compound => r.nested(|r| {
                let mut compound = CompoundTag::default();
                compound.read(r, mode)?;
                Ok(Value::Compound(compound))
            })?,
            Tag::IntArray => {
                let len = read_array_len(r, mode, std::mem::size_of::<i32>())?;
                let mut data = Vec::with_capacity(len);
                for _ in 0..len {
                    data.push(r.get_fixed_int()?);
                }
                Value::IntArray(data)
            }
        })
    }

    /// Write the payload only, no type byte or name.
    ///
    /// Takes `&mut self` because untyped lists settle their element type
    /// when first written.
    pub fn write<W: Write>(&mut self, w: &mut Writer<W>, mode: Mode) -> Result<()> {
        match self {
            Value::End => Ok(()),
            Value::Byte(v) => w.put_byte(*v as u8),
            Value::Short(v) => w.put_short(*v),
            Value::Int(v) => w.put_int(*v, mode),
            Value::Long(v) => w.put_long(*v),
            Value::Float(v) => w.put_float(*v),
            Value::Double(v) => w.put_double(*v),
            Value::ByteArray(v) => {
                w.put_len(v.len(), mode)?;
                let bs: Vec<u8> = v.iter().map(|b| *b as u8).collect();
                w.put_bytes(&bs)
            }
            Value::String(v) => w.put_string(v, mode),
            Value::List(v) => v.write(w, mode),
            Value::Compound(v) => v.write(w, mode),
            Value::IntArray(v) => {
                w.put_len(v.len(), mode)?;
                for i in v.iter() {
                    w.put_fixed_int(*i)?;
                }
                Ok(())
            }
        }
    }

    /// Element count for containers, `None` for everything else.
    pub fn count(&self, mode: CountMode) -> Option<usize> {
        match self {
            Value::List(v) => Some(v.count(mode)),
            Value::Compound(v) => Some(v.count(mode)),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(v) => Some(v as i64),
            Value::Short(v) => Some(v as i64),
            Value::Int(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            Value::Float(v) => Some(v as i64),
            Value::Double(v) => Some(v as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Byte(v) => Some(v as f64),
            Value::Short(v) => Some(v as f64),
            Value::Int(v) => Some(v as f64),
            Value::Long(v) => Some(v as f64),
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListTag> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut ListTag> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&CompoundTag> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut CompoundTag> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }
}

fn read_array_len(r: &mut Reader<'_>, mode: Mode, width: usize) -> Result<usize> {
    let len = r.get_int(mode)?;
    let len = usize::try_from(len)
        .map_err(|_| Error::bespoke(format!("negative array length: {}", len)))?;

    // Refuse to allocate for data that cannot be there.
    match len.checked_mul(width) {
        Some(bytes) if bytes <= r.remaining() => Ok(len),
        _ => Err(Error::unexpected_eof()),
    }
}

/// A tag with its name. Elements of a [`ListTag`] are named tags whose name
/// is empty and ignored by the encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedTag {
    name: String,
    value: Value,
}

impl NamedTag {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// A tag with an empty name, as stored in lists.
    pub fn unnamed(value: impl Into<Value>) -> Self {
        Self::new(String::new(), value)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn tag(&self) -> Tag {
        self.value.tag()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Replace the payload in place. The tag type of a node never changes,
    /// so a value of a different type is rejected and the node is left
    /// untouched.
    pub fn set_value(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        if value.tag() != self.tag() {
            return Err(Error::type_mismatch(self.tag(), value.tag()));
        }
        self.value = value;
        Ok(())
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Value {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
        impl From<&$type> for Value {
            fn from(val: &$type) -> Self {
                Self::$variant(val.to_owned()$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(u8, Byte, as i8);
from!(i16, Short);
from!(i32, Int);
from!(i64, Long);
from!(f32, Float);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(Vec<i8>, ByteArray);
from!(Vec<i32>, IntArray);
from!(ListTag, List);
from!(CompoundTag, Compound);

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}
