//! The list container.
//!
//! A [`ListTag`] is addressed by index like an array, but the slots are
//! allowed to be empty: [`ListTag::unset`] leaves a hole rather than
//! shifting later elements down. Counting stops at the first hole, so a
//! list with holes reports fewer elements than it holds, while reading
//! and writing only ever see the occupied slots.
//!
//! The element type starts as [`Tag::End`], meaning "not decided yet".
//! Elements of any type may be added while the list is being built; the
//! type is fixed either by [`ListTag::set_element_type`] or by the first
//! call to [`ListTag::write`], which refuses to emit a list whose elements
//! disagree.

use std::collections::BTreeMap;
use std::io::Write;

use log::{debug, warn};

use crate::{
    error::{Error, Result},
    stream::{Mode, Reader, Writer},
    CountMode, NamedTag, Tag, Value,
};

/// Something that can be stored with [`ListTag::set`].
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A complete node, installed as is.
    Tag(NamedTag),
    /// A bare payload. Updates an existing node in place, or is wrapped in
    /// a new unnamed node if the slot is empty.
    Raw(Value),
}

impl Element {
    pub fn raw(value: impl Into<Value>) -> Self {
        Element::Raw(value.into())
    }
}

impl From<NamedTag> for Element {
    fn from(tag: NamedTag) -> Self {
        Element::Tag(tag)
    }
}

impl From<Value> for Element {
    fn from(value: Value) -> Self {
        Element::Raw(value)
    }
}

/// Ordered, index addressed list of unnamed tags sharing one type.
#[derive(Debug, Clone)]
pub struct ListTag {
    element_type: Tag,
    slots: Vec<Option<NamedTag>>,
}

impl Default for ListTag {
    fn default() -> Self {
        Self {
            element_type: Tag::End,
            slots: Vec::new(),
        }
    }
}

// Holes are not part of a list's value, so two lists are equal when they
// agree on the element type and on every occupied slot.
impl PartialEq for ListTag {
    fn eq(&self, other: &Self) -> bool {
        self.element_type == other.element_type && self.iter().eq(other.iter())
    }
}

impl ListTag {
    /// List holding `elements` at indices `0, 1, 2, ...`. The element type
    /// is left undecided until the list is written.
    pub fn new<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = NamedTag>,
    {
        Self {
            element_type: Tag::End,
            slots: elements.into_iter().map(Some).collect(),
        }
    }

    /// A list as a named node, for use as a compound entry or root.
    pub fn named<I>(name: impl Into<String>, elements: I) -> NamedTag
    where
        I: IntoIterator<Item = NamedTag>,
    {
        NamedTag::new(name, Value::List(Self::new(elements)))
    }

    pub fn element_type(&self) -> Tag {
        self.element_type
    }

    /// Fix the element type ahead of writing. A list never goes back to
    /// being untyped, so setting [`Tag::End`] is ignored.
    pub fn set_element_type(&mut self, tag: Tag) {
        if tag != Tag::End {
            self.element_type = tag;
        }
    }

    /// True if `index` holds a tag.
    pub fn has(&self, index: usize) -> bool {
        self.get_tag(index).is_some()
    }

    /// The value at `index`. Nested lists and compounds come back as the
    /// container itself so lookups can be chained, scalars as their
    /// payload. `None` for empty or out of range slots.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.get_tag(index).map(NamedTag::value)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.get_tag_mut(index).map(NamedTag::value_mut)
    }

    /// The node at `index`, name included.
    pub fn get_tag(&self, index: usize) -> Option<&NamedTag> {
        self.slots.get(index)?.as_ref()
    }

    pub fn get_tag_mut(&mut self, index: usize) -> Option<&mut NamedTag> {
        self.slots.get_mut(index)?.as_mut()
    }

    /// Store at `index`, growing the list with empty slots if needed.
    ///
    /// A [`Element::Tag`] replaces whatever was in the slot. A
    /// [`Element::Raw`] value updates the payload of the node already in the
    /// slot, keeping that node and its name; if the slot is empty the value
    /// is wrapped in a new unnamed node.
    ///
    /// No type checking against the element type happens here, that is
    /// deferred to [`ListTag::write`]. The only failure is an in-place
    /// update with a value of a different type than the existing node,
    /// which loosely typed NBT libraries would accept.
    pub fn set(&mut self, index: usize, element: impl Into<Element>) -> Result<()> {
        match element.into() {
            Element::Tag(tag) => self.install(index, tag),
            Element::Raw(value) => {
                if let Some(existing) = self.get_tag_mut(index) {
                    return existing.set_value(value);
                }
                self.install(index, NamedTag::unnamed(value));
            }
        }
        Ok(())
    }

    /// Store after the last slot.
    pub fn push(&mut self, element: impl Into<Element>) {
        let tag = match element.into() {
            Element::Tag(tag) => tag,
            Element::Raw(value) => NamedTag::unnamed(value),
        };
        self.slots.push(Some(tag));
    }

    fn install(&mut self, index: usize, tag: NamedTag) {
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }
        self.slots[index] = Some(tag);
    }

    /// Remove the tag at `index`. Later elements keep their indices, so
    /// this leaves a hole unless it was the last slot.
    pub fn unset(&mut self, index: usize) -> Option<NamedTag> {
        let removed = self.slots.get_mut(index)?.take();
        while let Some(None) = self.slots.last() {
            self.slots.pop();
        }
        removed
    }

    /// Count elements by walking up from index 0 until the first empty
    /// slot. Elements after a hole are not counted.
    ///
    /// With [`CountMode::Recursive`] the walk index also jumps forward by
    /// the normal count of each nested list or compound it meets, and the
    /// count is the first empty index reached. Slots jumped over are never
    /// looked at, so `[[1, 2, 3], 4, 5, 6, 7]` counts as 5.
    pub fn count(&self, mode: CountMode) -> usize {
        let mut i = 0;
        while let Some(Some(tag)) = self.slots.get(i) {
            if mode == CountMode::Recursive {
                i += tag.value().count(CountMode::Normal).unwrap_or(0);
            }
            i += 1;
        }
        i
    }

    /// Same as `count(CountMode::Normal)`.
    pub fn len(&self) -> usize {
        self.count(CountMode::Normal)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Occupied slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &NamedTag)> + Clone + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|tag| (i, tag)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut NamedTag)> + '_ {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_mut().map(|tag| (i, tag)))
    }

    /// Every occupied slot keyed by index.
    pub fn value(&self) -> BTreeMap<usize, &NamedTag> {
        self.iter().collect()
    }

    /// Replace the contents with a list read from `r`.
    ///
    /// Reading is lenient. If the input runs out between elements
    /// the list is cut short without an error, and an element type that is
    /// not a known tag (or `End`) yields an empty list. Running out part way
    /// through an element is still an error.
    ///
    /// An unknown element type byte is not kept: the list comes back
    /// untyped, so writing it again emits `End` rather than the original
    /// byte.
    pub fn read(&mut self, r: &mut Reader<'_>, mode: Mode) -> Result<()> {
        self.slots.clear();

        let raw_type = r.get_byte()?;
        let size = r.get_int(mode)?;

        self.element_type = match Tag::try_from(raw_type) {
            Ok(tag) => tag,
            Err(()) => {
                warn!(
                    "skipping {} list elements of unknown type {}",
                    size, raw_type
                );
                Tag::End
            }
        };

        // No constructor for End or unknown types, nothing to read.
        if self.element_type == Tag::End {
            return Ok(());
        }

        for i in 0..size.max(0) {
            if r.is_eof() {
                debug!("list truncated at {} of {} elements", i, size);
                break;
            }
            let value = Value::read(self.element_type, r, mode)?;
            self.slots.push(Some(NamedTag::unnamed(value)));
        }

        Ok(())
    }

    /// Write the element type, the number of elements, then each element's
    /// payload.
    ///
    /// An untyped list takes the type of its first non-`End` element. If
    /// any element disagrees with the type this fails with
    /// [`ErrorKind::MixedList`][crate::error::ErrorKind::MixedList] before
    /// writing anything for this list. A failure inside a nested element
    /// stops the write at that element, leaving earlier bytes in `w`.
    pub fn write<W: Write>(&mut self, w: &mut Writer<W>, mode: Mode) -> Result<()> {
        let element_type = self.resolve_element_type()?;
        self.element_type = element_type;

        w.put_byte(element_type.into())?;

        let tags: Vec<&mut NamedTag> = self.slots.iter_mut().flatten().collect();
        w.put_len(tags.len(), mode)?;
        for tag in tags {
            tag.value_mut().write(w, mode)?;
        }

        Ok(())
    }

    fn resolve_element_type(&self) -> Result<Tag> {
        let tags = || self.iter().map(|(_, tag)| tag.tag());

        let expected = match self.element_type {
            Tag::End => tags().find(|t| *t != Tag::End).unwrap_or(Tag::End),
            typed => typed,
        };

        match tags().find(|t| *t != expected) {
            Some(found) => Err(Error::mixed_list(expected, found)),
            None => Ok(expected),
        }
    }
}

impl FromIterator<NamedTag> for ListTag {
    fn from_iter<I: IntoIterator<Item = NamedTag>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<NamedTag>> for ListTag {
    fn from(tags: Vec<NamedTag>) -> Self {
        Self::new(tags)
    }
}
