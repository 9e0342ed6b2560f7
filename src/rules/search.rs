use itertools::Itertools;

use crate::error::{Error, Result};
use crate::itemset::ItemSet;
use crate::itemsets::FrequentItemsets;
use crate::rules::{Rule, RuleParams};

/// Derives association rules from every frequent itemset of size >= 2.
///
/// Each proper nonempty subset of an itemset becomes an antecedent, with
/// the remaining labels as the consequent. Enumerating the power set is
/// O(2^k) in the itemset size, which stays small for market-basket data.
/// Rules come out grouped by itemset in itemset order, antecedents in
/// itemset order within a group, so output is reproducible.
pub fn generate_rules(frequent: &FrequentItemsets, params: &RuleParams) -> Result<Vec<Rule>> {
    if !(params.min_confidence > 0.0 && params.min_confidence <= 1.0) {
        return Err(Error::InvalidConfidence(params.min_confidence));
    }

    let transaction_count = frequent.transaction_count() as f64;
    let mut rules = Vec::new();

    for (itemset, itemset_count) in frequent.iter() {
        if itemset.len() < 2 {
            continue;
        }
        let support = itemset_count as f64 / transaction_count;

        for antecedent in antecedent_splits(itemset) {
            let consequent = itemset.exclusion(&antecedent);
            let antecedent_count = frequent.support_count(&antecedent);
            // Cannot be zero for a subset of a frequent itemset, but a
            // malformed collection must not panic the generator.
            let confidence = if antecedent_count == 0 {
                0.0
            } else {
                itemset_count as f64 / antecedent_count as f64
            };

            if params.filter_by_confidence && confidence < params.min_confidence {
                continue;
            }

            rules.push(Rule {
                antecedent,
                consequent,
                confidence,
                support,
            });
        }
    }

    Ok(rules)
}

/// Every proper nonempty subset of `itemset`, in itemset order.
fn antecedent_splits(itemset: &ItemSet) -> Vec<ItemSet> {
    let mut subsets: Vec<ItemSet> = itemset
        .iter()
        .map(String::as_str)
        .powerset()
        .filter(|subset| !subset.is_empty() && subset.len() < itemset.len())
        .map(|subset| subset.into_iter().collect())
        .collect();
    subsets.sort_unstable();
    subsets
}
