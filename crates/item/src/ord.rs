//! Total order and equality over [`DataItem`].
//!
//! The order is used for map key placement and deduplication, so it is
//! externally observable through encoded map byte layout. Kinds compare by
//! their declared ordinal first; within one kind the payload decides.
//!
//! Equality is kind-sensitive, not numeric: `Unsigned(5)` and
//! `Float(5.0)` are never equal. Floats compare with IEEE semantics in
//! `PartialEq` (NaN is unequal to everything, itself included), which is
//! why there is no `Eq` or `Ord` impl; [`DataItem::total_cmp`] is the
//! strict total order and ranks floats by `f64::total_cmp` so NaN still
//! has a stable position.

use std::cmp::Ordering;

use crate::item::DataItem;

impl DataItem {
    /// Strict total order over values of any kind.
    pub fn total_cmp(&self, other: &DataItem) -> Ordering {
        let by_kind = self.kind().cmp(&other.kind());
        if by_kind != Ordering::Equal {
            return by_kind;
        }
        match (self, other) {
            (DataItem::Unsigned(a), DataItem::Unsigned(b)) => a.cmp(b),
            (DataItem::Negative(a), DataItem::Negative(b)) => a.cmp(b),
            (DataItem::Text(a), DataItem::Text(b)) => a.cmp(b),
            (DataItem::Binary(a), DataItem::Binary(b)) => a.cmp(b),
            (DataItem::Array(a), DataItem::Array(b)) => cmp_items(a, b),
            (DataItem::Map(a), DataItem::Map(b)) => cmp_entries(a, b),
            (DataItem::Tagged(tag_a, child_a), DataItem::Tagged(tag_b, child_b)) => {
                tag_a.cmp(tag_b).then_with(|| child_a.total_cmp(child_b))
            }
            (DataItem::Simple(a), DataItem::Simple(b)) => a.cmp(b),
            (DataItem::Float(a), DataItem::Float(b)) => a.total_cmp(b),
            _ => unreachable!("kind ordinals matched"),
        }
    }
}

/// Lexicographic element-wise comparison.
fn cmp_items(a: &[DataItem], b: &[DataItem]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        let ord = x.total_cmp(y);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.len().cmp(&b.len())
}

/// Lexicographic pair-wise comparison over already-sorted entries.
fn cmp_entries(a: &[(DataItem, DataItem)], b: &[(DataItem, DataItem)]) -> Ordering {
    for ((key_a, val_a), (key_b, val_b)) in a.iter().zip(b.iter()) {
        let ord = key_a.total_cmp(key_b).then_with(|| val_a.total_cmp(val_b));
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.len().cmp(&b.len())
}

impl PartialEq for DataItem {
    fn eq(&self, other: &DataItem) -> bool {
        match (self, other) {
            (DataItem::Unsigned(a), DataItem::Unsigned(b)) => a == b,
            (DataItem::Negative(a), DataItem::Negative(b)) => a == b,
            (DataItem::Text(a), DataItem::Text(b)) => a == b,
            (DataItem::Binary(a), DataItem::Binary(b)) => a == b,
            (DataItem::Array(a), DataItem::Array(b)) => a == b,
            (DataItem::Map(a), DataItem::Map(b)) => a == b,
            (DataItem::Tagged(tag_a, child_a), DataItem::Tagged(tag_b, child_b)) => {
                tag_a == tag_b && child_a == child_b
            }
            (DataItem::Simple(a), DataItem::Simple(b)) => a == b,
            // IEEE equality: NaN != NaN.
            (DataItem::Float(a), DataItem::Float(b)) => a == b,
            _ => false,
        }
    }
}
