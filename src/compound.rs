use std::io::Write;

use indexmap::IndexMap;
use log::debug;

use crate::{
    error::{Error, Result},
    stream::{Mode, Reader, Writer},
    CountMode, NamedTag, Tag, Value,
};

/// Name keyed collection of tags, kept in insertion order.
///
/// On the wire each entry carries its own type byte and name, and the
/// compound is closed by an `End` byte.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundTag {
    entries: IndexMap<String, Value>,
}

impl CompoundTag {
    pub fn new() -> Self {
        Self::default()
    }

    /// A compound as a named node.
    pub fn named<I>(name: impl Into<String>, entries: I) -> NamedTag
    where
        I: IntoIterator<Item = NamedTag>,
    {
        NamedTag::new(name, Value::Compound(entries.into_iter().collect()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.entries.get_mut(name)
    }

    /// Insert or replace an entry, returning the old value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(name.into(), value.into())
    }

    /// Remove an entry, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.entries.shift_remove(name)
    }

    /// Number of entries. [`CountMode::Recursive`] adds the recursive count
    /// of every nested list and compound. Entries are keyed rather than
    /// indexed, so there is no walk index to jump and every entry is
    /// visited.
    pub fn count(&self, mode: CountMode) -> usize {
        match mode {
            CountMode::Normal => self.entries.len(),
            CountMode::Recursive => self
                .entries
                .values()
                .map(|v| 1 + v.count(mode).unwrap_or(0))
                .sum(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Value> {
        self.entries.iter_mut()
    }

    /// Replace the contents with entries read from `r`, up to the closing
    /// `End` byte. Like lists, a compound cut off between entries is
    /// accepted as is.
    pub fn read(&mut self, r: &mut Reader<'_>, mode: Mode) -> Result<()> {
        self.entries.clear();

        loop {
            if r.is_eof() {
                debug!("compound truncated after {} entries", self.entries.len());
                break;
            }

            let raw = r.get_byte()?;
            let tag = Tag::try_from(raw).map_err(|_| Error::invalid_tag(raw))?;
            if tag == Tag::End {
                break;
            }

            let name = r.get_string(mode)?;
            let value = Value::read(tag, r, mode)?;
            self.entries.insert(name, value);
        }

        Ok(())
    }

    /// Write every entry followed by the closing `End` byte. Entries holding
    /// [`Value::End`] have no encoding and are skipped.
    pub fn write<W: Write>(&mut self, w: &mut Writer<W>, mode: Mode) -> Result<()> {
        for (name, value) in self.entries.iter_mut() {
            let tag = value.tag();
            if tag == Tag::End {
                continue;
            }
            w.put_byte(tag.into())?;
            w.put_string(name, mode)?;
            value.write(w, mode)?;
        }

        w.put_byte(Tag::End.into())
    }
}

impl FromIterator<NamedTag> for CompoundTag {
    fn from_iter<I: IntoIterator<Item = NamedTag>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|tag| (tag.name().to_owned(), tag.into_value()))
            .collect();
        Self { entries }
    }
}
