use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use log::debug;

use crate::error::{Error, Result};
use crate::itemset::ItemSet;
use crate::itemsets::index::occurrence_index;
use crate::itemsets::FrequentItemsets;
use crate::types::{SupportCount, TidList, Transaction};

/// Mines every itemset whose support count reaches
/// `ceil(min_support * transactions.len())`.
///
/// The search is level-wise over tid-lists: level 1 keeps the single
/// items that meet the cutoff, and each further level extends every
/// frequent itemset with every frequent single item, testing the
/// candidate by intersecting the two tid-lists. Candidates are
/// deduplicated through the order-independent `ItemSet` identity, so an
/// itemset enters the result at most once no matter which extension
/// order produced it.
///
/// `max_size` caps the size of mined itemsets; without it the search
/// runs until a level produces nothing new.
pub fn frequent_itemsets(
    transactions: &[Transaction],
    min_support: f64,
    max_size: Option<usize>,
) -> Result<FrequentItemsets> {
    if !(min_support > 0.0 && min_support <= 1.0) {
        return Err(Error::InvalidSupport(min_support));
    }

    let transaction_count = transactions.len();
    let min_count = (min_support * transaction_count as f64).ceil() as SupportCount;

    if max_size == Some(0) {
        return Ok(FrequentItemsets::from_tid_lists(
            BTreeMap::new(),
            transaction_count,
        ));
    }

    // Level 1: frequent single items, keyed by bare label for the
    // extension loop below.
    let singles: BTreeMap<String, TidList> = occurrence_index(transactions)
        .into_iter()
        .filter(|(_, tids)| tids.len() >= min_count)
        .collect();
    debug!("level 1: {} frequent items", singles.len());

    let mut frequent: BTreeMap<ItemSet, TidList> = singles
        .iter()
        .map(|(label, tids)| (ItemSet::singleton(label.clone()), tids.clone()))
        .collect();

    // Each level is read from an immutable snapshot and written into a
    // fresh map, never into a map still being iterated.
    let mut current = frequent.clone();
    let mut level = 1;

    while !current.is_empty() && max_size.map_or(true, |cap| level < cap) {
        let mut next: BTreeMap<ItemSet, TidList> = BTreeMap::new();

        for (itemset, tids) in &current {
            for (label, label_tids) in &singles {
                if itemset.contains(label) {
                    continue;
                }
                let candidate = itemset.with(label.clone());
                if let Entry::Vacant(slot) = next.entry(candidate) {
                    let common = tids & label_tids;
                    if common.len() >= min_count {
                        slot.insert(common);
                    }
                }
            }
        }

        level += 1;
        debug!("level {}: {} frequent itemsets", level, next.len());
        frequent.extend(next.iter().map(|(set, tids)| (set.clone(), tids.clone())));
        current = next;
    }

    Ok(FrequentItemsets::from_tid_lists(frequent, transaction_count))
}
