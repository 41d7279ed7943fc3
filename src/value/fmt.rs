//! Human readable tree dumps in the traditional NBT text layout:
//!
//! ```text
//! TAG_Compound('hello world'): 1 entries
//! {
//!   TAG_String('name'): 'Bananrama'
//! }
//! ```
//!
//! Only for diagnostics, nothing parses this back.

use std::fmt::{self, Display, Formatter};

use super::{NamedTag, Value};
use crate::{CompoundTag, ListTag};

const INDENT: usize = 2;

fn write_name(f: &mut Formatter<'_>, name: &str) -> fmt::Result {
    if name.is_empty() {
        f.write_str("None")
    } else {
        write!(f, "'{}'", name)
    }
}

fn write_node(f: &mut Formatter<'_>, name: &str, value: &Value, depth: usize) -> fmt::Result {
    write!(f, "{:pad$}{}(", "", value.tag(), pad = depth * INDENT)?;
    write_name(f, name)?;
    f.write_str("): ")?;
    write_payload(f, value, depth)
}

fn write_payload(f: &mut Formatter<'_>, value: &Value, depth: usize) -> fmt::Result {
    match value {
        Value::End => Ok(()),
        Value::Byte(v) => write!(f, "{}", v),
        Value::Short(v) => write!(f, "{}", v),
        Value::Int(v) => write!(f, "{}", v),
        Value::Long(v) => write!(f, "{}", v),
        Value::Float(v) => write!(f, "{}", v),
        Value::Double(v) => write!(f, "{}", v),
        Value::ByteArray(v) => write!(f, "[{} bytes]", v.len()),
        Value::String(v) => write!(f, "'{}'", v),
        Value::IntArray(v) => write!(f, "[{} ints]", v.len()),
        Value::List(list) => {
            let children = list.iter().map(|(_, tag)| (tag.name(), tag.value()));
            write_children(f, children, depth)
        }
        Value::Compound(compound) => {
            let children = compound.iter().map(|(name, value)| (name.as_str(), value));
            write_children(f, children, depth)
        }
    }
}

fn write_children<'v, I>(f: &mut Formatter<'_>, children: I, depth: usize) -> fmt::Result
where
    I: Iterator<Item = (&'v str, &'v Value)> + Clone,
{
    let pad = depth * INDENT;
    writeln!(f, "{} entries", children.clone().count())?;
    writeln!(f, "{:pad$}{{", "", pad = pad)?;
    for (name, value) in children {
        write_node(f, name, value, depth + 1)?;
        writeln!(f)?;
    }
    write!(f, "{:pad$}}}", "", pad = pad)
}

impl Display for NamedTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_node(f, self.name(), self.value(), 0)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_node(f, "", self, 0)
    }
}

impl Display for ListTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(None): ", crate::Tag::List)?;
        let children = self.iter().map(|(_, tag)| (tag.name(), tag.value()));
        write_children(f, children, 0)
    }
}

impl Display for CompoundTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(None): ", crate::Tag::Compound)?;
        let children = self.iter().map(|(name, value)| (name.as_str(), value));
        write_children(f, children, 0)
    }
}
