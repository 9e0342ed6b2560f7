use std::collections::BTreeSet;

use roaring::RoaringBitmap;

pub type ItemLabel = String;

/// One market basket: an unordered, duplicate-free set of item labels,
/// identified by its position in the input list.
pub type Transaction = BTreeSet<ItemLabel>;

/// Ascending, deduplicated set of transaction indices containing an item
/// or itemset.
pub type TidList = RoaringBitmap;

pub type SupportCount = u64;
