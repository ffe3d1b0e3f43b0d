//! [`DataItem`] — the variant value model spanning every CBOR value shape.

use std::fmt;

use crate::constants::{SIMPLE_FALSE, SIMPLE_NULL, SIMPLE_TRUE, SIMPLE_UNDEFINED};
use crate::error::CborError;

/// Discriminant of a [`DataItem`].
///
/// The declared order is canonical: the total order compares kinds by this
/// ordinal sequence first, and map iteration (and therefore encoded map
/// byte order) depends on it. Do not reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Kind {
    Unsigned,
    Negative,
    Text,
    Array,
    Map,
    Tagged,
    Simple,
    Float,
    Binary,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Unsigned => "unsigned",
            Kind::Negative => "negative",
            Kind::Text => "text",
            Kind::Array => "array",
            Kind::Map => "map",
            Kind::Tagged => "tagged",
            Kind::Simple => "simple",
            Kind::Float => "float",
            Kind::Binary => "binary",
        };
        f.write_str(name)
    }
}

/// A single CBOR value.
///
/// Covers every shape of the wire format:
/// - unsigned and negative integers (`Negative(m)` represents `-1 - m`,
///   so the magnitude spans the full unsigned range)
/// - byte strings and UTF-8 text strings
/// - arrays (insertion/decode order) and maps (entries kept sorted by
///   [`DataItem::total_cmp`] over keys, unique keys)
/// - tagged values (a tag number wrapping exactly one child)
/// - simple values (booleans, null, undefined, and opaque codes)
/// - floating point (always held at double width)
#[derive(Debug, Clone)]
pub enum DataItem {
    Unsigned(u64),
    Negative(u64),
    Text(String),
    Array(Vec<DataItem>),
    /// Entries sorted by total order over keys; maintained by every
    /// constructor and mutation path in this crate.
    Map(Vec<(DataItem, DataItem)>),
    Tagged(u64, Box<DataItem>),
    Simple(u8),
    Float(f64),
    Binary(Vec<u8>),
}

impl Default for DataItem {
    fn default() -> Self {
        DataItem::Simple(SIMPLE_UNDEFINED)
    }
}

impl DataItem {
    /// The CBOR null value.
    pub fn null() -> Self {
        DataItem::Simple(SIMPLE_NULL)
    }

    /// The CBOR undefined value.
    pub fn undefined() -> Self {
        DataItem::Simple(SIMPLE_UNDEFINED)
    }

    /// Wraps `item` in a semantic tag.
    pub fn tagged(tag: u64, item: impl Into<DataItem>) -> Self {
        DataItem::Tagged(tag, Box::new(item.into()))
    }

    /// Returns the discriminant of this value.
    pub fn kind(&self) -> Kind {
        match self {
            DataItem::Unsigned(_) => Kind::Unsigned,
            DataItem::Negative(_) => Kind::Negative,
            DataItem::Text(_) => Kind::Text,
            DataItem::Array(_) => Kind::Array,
            DataItem::Map(_) => Kind::Map,
            DataItem::Tagged(..) => Kind::Tagged,
            DataItem::Simple(_) => Kind::Simple,
            DataItem::Float(_) => Kind::Float,
            DataItem::Binary(_) => Kind::Binary,
        }
    }

    pub fn is_unsigned(&self) -> bool {
        matches!(self, DataItem::Unsigned(_))
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, DataItem::Negative(_))
    }

    /// Either integer kind.
    pub fn is_int(&self) -> bool {
        matches!(self, DataItem::Unsigned(_) | DataItem::Negative(_))
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, DataItem::Binary(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, DataItem::Text(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, DataItem::Array(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, DataItem::Map(_))
    }

    pub fn is_tagged(&self) -> bool {
        matches!(self, DataItem::Tagged(..))
    }

    pub fn is_simple(&self) -> bool {
        matches!(self, DataItem::Simple(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, DataItem::Simple(SIMPLE_FALSE) | DataItem::Simple(SIMPLE_TRUE))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DataItem::Simple(SIMPLE_NULL))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, DataItem::Simple(SIMPLE_UNDEFINED))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, DataItem::Float(_))
    }

    /// Any numeric kind: unsigned, negative, or float.
    pub fn is_number(&self) -> bool {
        matches!(
            self,
            DataItem::Unsigned(_) | DataItem::Negative(_) | DataItem::Float(_)
        )
    }

    // ------------------------------------------------------- lenient narrowing
    //
    // Total conversions that never fail: a wrong-kind access yields the
    // type's zero value, and a tagged value transparently unwraps its
    // child. The `try_*` family below reports mismatches instead.

    /// Narrows to `u64`; `Negative(m)` yields the two's-complement bits of
    /// `-1 - m`, floats truncate toward the stored value.
    pub fn to_unsigned(&self) -> u64 {
        match self {
            DataItem::Unsigned(value) => *value,
            DataItem::Negative(value) => !*value,
            DataItem::Tagged(_, child) => child.to_unsigned(),
            DataItem::Float(value) => *value as u64,
            _ => 0,
        }
    }

    /// Narrows to `i64`; `Negative(m)` yields `-1 - m` (wrapping for
    /// magnitudes beyond the `i64` range), floats truncate.
    pub fn to_signed(&self) -> i64 {
        match self {
            DataItem::Unsigned(value) => *value as i64,
            DataItem::Negative(value) => (-1i64).wrapping_sub(*value as i64),
            DataItem::Tagged(_, child) => child.to_signed(),
            DataItem::Float(value) => *value as i64,
            _ => 0,
        }
    }

    /// Narrows to `f64`.
    ///
    /// `Negative(m)` reconstructs `-1 - m` by splitting the magnitude into
    /// high and low 32-bit halves, so the full unsigned range converts
    /// without going through a lossy 64-bit integer cast.
    pub fn to_float(&self) -> f64 {
        match self {
            DataItem::Unsigned(value) => *value as f64,
            DataItem::Negative(value) => {
                let high = -1i64 - (value >> 32) as i64;
                let low = -1i64 - (value & 0xffff_ffff) as i64;
                (high as f64) * 4_294_967_296.0 + low as f64
            }
            DataItem::Tagged(_, child) => child.to_float(),
            DataItem::Float(value) => *value,
            _ => 0.0,
        }
    }

    /// Narrows to `bool`; only `Simple(True)` is `true`.
    pub fn to_bool(&self) -> bool {
        match self {
            DataItem::Simple(code) => *code == SIMPLE_TRUE,
            DataItem::Tagged(_, child) => child.to_bool(),
            _ => false,
        }
    }

    pub fn to_binary(&self) -> &[u8] {
        match self {
            DataItem::Binary(bytes) => bytes,
            DataItem::Tagged(_, child) => child.to_binary(),
            _ => &[],
        }
    }

    pub fn to_text(&self) -> &str {
        match self {
            DataItem::Text(text) => text,
            DataItem::Tagged(_, child) => child.to_text(),
            _ => "",
        }
    }

    pub fn to_array(&self) -> &[DataItem] {
        match self {
            DataItem::Array(items) => items,
            DataItem::Tagged(_, child) => child.to_array(),
            _ => &[],
        }
    }

    pub fn to_map(&self) -> &[(DataItem, DataItem)] {
        match self {
            DataItem::Map(entries) => entries,
            DataItem::Tagged(_, child) => child.to_map(),
            _ => &[],
        }
    }

    /// Narrows to a simple-value code; other kinds read as `Undefined`.
    pub fn to_simple(&self) -> u8 {
        match self {
            DataItem::Simple(code) => *code,
            DataItem::Tagged(_, child) => child.to_simple(),
            _ => SIMPLE_UNDEFINED,
        }
    }

    // ------------------------------------------------------ fallible narrowing

    fn mismatch(&self, expected: Kind) -> CborError {
        CborError::KindMismatch {
            expected,
            actual: self.kind(),
        }
    }

    pub fn try_unsigned(&self) -> Result<u64, CborError> {
        match self {
            DataItem::Unsigned(value) => Ok(*value),
            DataItem::Tagged(_, child) => child.try_unsigned(),
            _ => Err(self.mismatch(Kind::Unsigned)),
        }
    }

    /// Fallible signed read; accepts either integer kind.
    pub fn try_signed(&self) -> Result<i64, CborError> {
        match self {
            DataItem::Unsigned(value) => Ok(*value as i64),
            DataItem::Negative(value) => Ok((-1i64).wrapping_sub(*value as i64)),
            DataItem::Tagged(_, child) => child.try_signed(),
            _ => Err(self.mismatch(Kind::Negative)),
        }
    }

    pub fn try_float(&self) -> Result<f64, CborError> {
        match self {
            DataItem::Float(value) => Ok(*value),
            DataItem::Tagged(_, child) => child.try_float(),
            _ => Err(self.mismatch(Kind::Float)),
        }
    }

    pub fn try_bool(&self) -> Result<bool, CborError> {
        match self {
            DataItem::Simple(SIMPLE_FALSE) => Ok(false),
            DataItem::Simple(SIMPLE_TRUE) => Ok(true),
            DataItem::Tagged(_, child) => child.try_bool(),
            _ => Err(self.mismatch(Kind::Simple)),
        }
    }

    pub fn try_binary(&self) -> Result<&[u8], CborError> {
        match self {
            DataItem::Binary(bytes) => Ok(bytes),
            DataItem::Tagged(_, child) => child.try_binary(),
            _ => Err(self.mismatch(Kind::Binary)),
        }
    }

    pub fn try_text(&self) -> Result<&str, CborError> {
        match self {
            DataItem::Text(text) => Ok(text),
            DataItem::Tagged(_, child) => child.try_text(),
            _ => Err(self.mismatch(Kind::Text)),
        }
    }

    pub fn try_array(&self) -> Result<&[DataItem], CborError> {
        match self {
            DataItem::Array(items) => Ok(items),
            DataItem::Tagged(_, child) => child.try_array(),
            _ => Err(self.mismatch(Kind::Array)),
        }
    }

    pub fn try_map(&self) -> Result<&[(DataItem, DataItem)], CborError> {
        match self {
            DataItem::Map(entries) => Ok(entries),
            DataItem::Tagged(_, child) => child.try_map(),
            _ => Err(self.mismatch(Kind::Map)),
        }
    }

    pub fn try_simple(&self) -> Result<u8, CborError> {
        match self {
            DataItem::Simple(code) => Ok(*code),
            DataItem::Tagged(_, child) => child.try_simple(),
            _ => Err(self.mismatch(Kind::Simple)),
        }
    }

    // --------------------------------------------------------------- mutation
    //
    // Kind coercion is opt-in: `ensure_array`/`ensure_map` convert the
    // receiver explicitly, while `push`/`insert` refuse wrong-kind
    // receivers instead of silently rewriting them.

    /// Coerces this value to an (initially empty) array when it is not
    /// one already, discarding prior content.
    pub fn ensure_array(&mut self) -> &mut Vec<DataItem> {
        if !self.is_array() {
            *self = DataItem::Array(Vec::new());
        }
        match self {
            DataItem::Array(items) => items,
            _ => unreachable!(),
        }
    }

    /// Coerces this value to an (initially empty) map when it is not one
    /// already, discarding prior content.
    pub fn ensure_map(&mut self) {
        if !self.is_map() {
            *self = DataItem::Map(Vec::new());
        }
    }

    /// Appends to an array value.
    pub fn push(&mut self, item: impl Into<DataItem>) -> Result<(), CborError> {
        match self {
            DataItem::Array(items) => {
                items.push(item.into());
                Ok(())
            }
            _ => Err(self.mismatch(Kind::Array)),
        }
    }

    /// Inserts an entry into a map value at its total-order position.
    ///
    /// A duplicate key overwrites the stored entry; the previous value is
    /// returned.
    pub fn insert(
        &mut self,
        key: impl Into<DataItem>,
        value: impl Into<DataItem>,
    ) -> Result<Option<DataItem>, CborError> {
        match self {
            DataItem::Map(entries) => Ok(map_insert(entries, key.into(), value.into())),
            _ => Err(self.mismatch(Kind::Map)),
        }
    }

    /// Looks up a map entry by key.
    pub fn get(&self, key: &DataItem) -> Option<&DataItem> {
        match self {
            DataItem::Map(entries) => entries
                .binary_search_by(|(k, _)| k.total_cmp(key))
                .ok()
                .map(|i| &entries[i].1),
            _ => None,
        }
    }

    /// Looks up a map entry by key, mutably.
    pub fn get_mut(&mut self, key: &DataItem) -> Option<&mut DataItem> {
        match self {
            DataItem::Map(entries) => entries
                .binary_search_by(|(k, _)| k.total_cmp(key))
                .ok()
                .map(|i| &mut entries[i].1),
            _ => None,
        }
    }

    /// Positional access into an array value.
    pub fn at(&self, index: usize) -> Result<&DataItem, CborError> {
        match self {
            DataItem::Array(items) => items.get(index).ok_or(CborError::IndexOutOfBounds),
            _ => Err(self.mismatch(Kind::Array)),
        }
    }

    /// Positional access into an array value, mutably.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut DataItem, CborError> {
        match self {
            DataItem::Array(items) => items.get_mut(index).ok_or(CborError::IndexOutOfBounds),
            _ => Err(self.mismatch(Kind::Array)),
        }
    }

    /// Element/entry count for arrays and maps; 0 for everything else.
    pub fn len(&self) -> usize {
        match self {
            DataItem::Array(items) => items.len(),
            DataItem::Map(entries) => entries.len(),
            _ => 0,
        }
    }

    /// Emptiness for arrays and maps; `Simple(Null)` also reads as empty.
    pub fn is_empty(&self) -> bool {
        match self {
            DataItem::Array(items) => items.is_empty(),
            DataItem::Map(entries) => entries.is_empty(),
            DataItem::Simple(code) => *code == SIMPLE_NULL,
            _ => false,
        }
    }

    /// Tag number of a tagged value; 0 for every other kind.
    pub fn tag(&self) -> u64 {
        match self {
            DataItem::Tagged(tag, _) => *tag,
            _ => 0,
        }
    }

    /// The wrapped child of a tagged value; a default value otherwise.
    pub fn child(&self) -> DataItem {
        match self {
            DataItem::Tagged(_, child) => (**child).clone(),
            _ => DataItem::default(),
        }
    }

    /// Borrowed access to the wrapped child of a tagged value.
    pub fn try_child(&self) -> Option<&DataItem> {
        match self {
            DataItem::Tagged(_, child) => Some(child),
            _ => None,
        }
    }
}

/// Sorted-position map insert with duplicate-key overwrite.
pub(crate) fn map_insert(
    entries: &mut Vec<(DataItem, DataItem)>,
    key: DataItem,
    value: DataItem,
) -> Option<DataItem> {
    match entries.binary_search_by(|(k, _)| k.total_cmp(&key)) {
        Ok(i) => Some(std::mem::replace(&mut entries[i].1, value)),
        Err(i) => {
            entries.insert(i, (key, value));
            None
        }
    }
}

/// Builds an array value from a sequence of items.
pub fn array<I>(items: I) -> DataItem
where
    I: IntoIterator,
    I::Item: Into<DataItem>,
{
    DataItem::Array(items.into_iter().map(Into::into).collect())
}

/// Builds a map value from key/value pairs (sorted, later duplicates win).
pub fn map<I, K, V>(pairs: I) -> DataItem
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<DataItem>,
    V: Into<DataItem>,
{
    let mut entries = Vec::new();
    for (key, value) in pairs {
        map_insert(&mut entries, key.into(), value.into());
    }
    DataItem::Map(entries)
}

// ------------------------------------------------------------- construction

impl From<bool> for DataItem {
    fn from(value: bool) -> Self {
        DataItem::Simple(if value { SIMPLE_TRUE } else { SIMPLE_FALSE })
    }
}

macro_rules! from_unsigned {
    ($($ty:ty),*) => {$(
        impl From<$ty> for DataItem {
            fn from(value: $ty) -> Self {
                DataItem::Unsigned(value as u64)
            }
        }
    )*};
}

from_unsigned!(u8, u16, u32, u64, usize);

macro_rules! from_signed {
    ($($ty:ty),*) => {$(
        impl From<$ty> for DataItem {
            fn from(value: $ty) -> Self {
                if value < 0 {
                    DataItem::Negative((-1 - value as i64) as u64)
                } else {
                    DataItem::Unsigned(value as u64)
                }
            }
        }
    )*};
}

from_signed!(i8, i16, i32, i64, isize);

impl From<f32> for DataItem {
    fn from(value: f32) -> Self {
        DataItem::Float(value as f64)
    }
}

impl From<f64> for DataItem {
    fn from(value: f64) -> Self {
        DataItem::Float(value)
    }
}

impl From<&str> for DataItem {
    fn from(value: &str) -> Self {
        DataItem::Text(value.to_owned())
    }
}

impl From<String> for DataItem {
    fn from(value: String) -> Self {
        DataItem::Text(value)
    }
}

impl From<&[u8]> for DataItem {
    fn from(value: &[u8]) -> Self {
        DataItem::Binary(value.to_vec())
    }
}

impl From<Vec<u8>> for DataItem {
    fn from(value: Vec<u8>) -> Self {
        DataItem::Binary(value)
    }
}

impl From<Vec<DataItem>> for DataItem {
    fn from(value: Vec<DataItem>) -> Self {
        DataItem::Array(value)
    }
}

impl FromIterator<DataItem> for DataItem {
    fn from_iter<I: IntoIterator<Item = DataItem>>(iter: I) -> Self {
        DataItem::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(DataItem, DataItem)> for DataItem {
    fn from_iter<I: IntoIterator<Item = (DataItem, DataItem)>>(iter: I) -> Self {
        map(iter)
    }
}
