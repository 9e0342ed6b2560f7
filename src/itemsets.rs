pub mod index;
pub mod search;

use std::collections::BTreeMap;

use crate::itemset::ItemSet;
use crate::types::{SupportCount, TidList};

/// All itemsets that met the support cutoff in one mining run, with their
/// exact support counts. Iteration follows itemset order (cardinality
/// ascending, then lexicographic), which is also the output row order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequentItemsets {
    counts: BTreeMap<ItemSet, SupportCount>,
    transaction_count: usize,
}

impl FrequentItemsets {
    pub(crate) fn from_tid_lists(
        tid_lists: BTreeMap<ItemSet, TidList>,
        transaction_count: usize,
    ) -> Self {
        let counts = tid_lists
            .into_iter()
            .map(|(itemset, tids)| (itemset, tids.len()))
            .collect();
        Self {
            counts,
            transaction_count,
        }
    }

    /// Exact number of transactions containing `itemset`; 0 when the
    /// itemset was not mined as frequent.
    pub fn support_count(&self, itemset: &ItemSet) -> SupportCount {
        self.counts.get(itemset).copied().unwrap_or(0)
    }

    pub fn contains(&self, itemset: &ItemSet) -> bool {
        self.counts.contains_key(itemset)
    }

    pub fn transaction_count(&self) -> usize {
        self.transaction_count
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Itemsets with their support counts, in itemset order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemSet, SupportCount)> {
        self.counts.iter().map(|(itemset, &count)| (itemset, count))
    }
}
