use std::collections::BTreeMap;

use crate::types::{ItemLabel, TidList, Transaction};

/// Builds the raw inverted index: every item label that appears at least
/// once, mapped to the ascending set of transaction indices containing
/// it. No support filtering happens here, and the ordered map makes the
/// result deterministic for identical input.
pub fn occurrence_index(transactions: &[Transaction]) -> BTreeMap<ItemLabel, TidList> {
    let mut index: BTreeMap<ItemLabel, TidList> = BTreeMap::new();
    for (tid, transaction) in transactions.iter().enumerate() {
        for label in transaction {
            index
                .entry(label.clone())
                .or_insert_with(TidList::new)
                .insert(tid as u32);
        }
    }
    index
}
