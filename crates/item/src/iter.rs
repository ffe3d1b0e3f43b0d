//! Forward traversal over the children of a [`DataItem`].

use std::slice;

use crate::item::DataItem;

/// One step of a traversal: an array element, or a map entry exposing
/// both key and value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemRef<'a> {
    Element(&'a DataItem),
    Entry {
        key: &'a DataItem,
        value: &'a DataItem,
    },
}

impl<'a> ItemRef<'a> {
    /// The entry key; `None` for array elements.
    pub fn key(&self) -> Option<&'a DataItem> {
        match self {
            ItemRef::Element(_) => None,
            ItemRef::Entry { key, .. } => Some(key),
        }
    }

    /// The element itself, or the entry value.
    pub fn value(&self) -> &'a DataItem {
        match self {
            ItemRef::Element(item) => item,
            ItemRef::Entry { value, .. } => value,
        }
    }
}

/// Non-owning forward cursor over a value's children.
///
/// Arrays yield elements in stored order; maps yield entries in
/// total-order key order; every other kind yields nothing. Exhaustion is
/// signalled by `None`, the iterator-protocol end marker.
pub enum ItemIter<'a> {
    Empty,
    Array(slice::Iter<'a, DataItem>),
    Map(slice::Iter<'a, (DataItem, DataItem)>),
}

impl<'a> Iterator for ItemIter<'a> {
    type Item = ItemRef<'a>;

    fn next(&mut self) -> Option<ItemRef<'a>> {
        match self {
            ItemIter::Empty => None,
            ItemIter::Array(items) => items.next().map(ItemRef::Element),
            ItemIter::Map(entries) => entries
                .next()
                .map(|(key, value)| ItemRef::Entry { key, value }),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            ItemIter::Empty => (0, Some(0)),
            ItemIter::Array(items) => items.size_hint(),
            ItemIter::Map(entries) => entries.size_hint(),
        }
    }
}

impl DataItem {
    /// Iterates over this value's children.
    pub fn iter(&self) -> ItemIter<'_> {
        match self {
            DataItem::Array(items) => ItemIter::Array(items.iter()),
            DataItem::Map(entries) => ItemIter::Map(entries.iter()),
            _ => ItemIter::Empty,
        }
    }
}

impl<'a> IntoIterator for &'a DataItem {
    type Item = ItemRef<'a>;
    type IntoIter = ItemIter<'a>;

    fn into_iter(self) -> ItemIter<'a> {
        self.iter()
    }
}
