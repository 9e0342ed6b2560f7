use std::cmp::Ordering;
use std::fmt;

use crate::types::ItemLabel;

/// Canonical, order-independent group of item labels.
///
/// Labels are kept sorted ascending without duplicates, so equality and
/// hashing depend only on the label set, never on construction order.
/// Itemsets never change after construction; every operation returns a
/// new value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ItemSet {
    items: Vec<ItemLabel>,
}

impl ItemSet {
    pub fn singleton(label: impl Into<ItemLabel>) -> Self {
        Self {
            items: vec![label.into()],
        }
    }

    /// A copy of `self` extended with one more label.
    pub fn with(&self, label: impl Into<ItemLabel>) -> Self {
        let label = label.into();
        let mut items = self.items.clone();
        if let Err(position) = items.binary_search(&label) {
            items.insert(position, label);
        }
        Self { items }
    }

    pub fn union_of<'a>(sets: impl IntoIterator<Item = &'a ItemSet>) -> Self {
        sets.into_iter()
            .flat_map(|set| set.items.iter().cloned())
            .collect()
    }

    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|label| other.contains(label.as_str()))
                .cloned()
                .collect(),
        }
    }

    /// Labels of `self` that are not in `other` (asymmetric difference).
    pub fn exclusion(&self, other: &Self) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|label| !other.contains(label.as_str()))
                .cloned()
                .collect(),
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.items
            .binary_search_by(|item| item.as_str().cmp(label))
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Labels in ascending order.
    pub fn labels(&self) -> &[ItemLabel] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ItemLabel> {
        self.items.iter()
    }
}

/// Itemset order: cardinality ascending, ties broken by comparing the
/// ascending-sorted label sequences element-wise.
impl Ord for ItemSet {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.items.cmp(&other.items))
    }
}

impl PartialOrd for ItemSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromIterator<ItemLabel> for ItemSet {
    fn from_iter<I: IntoIterator<Item = ItemLabel>>(labels: I) -> Self {
        let mut items: Vec<ItemLabel> = labels.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self { items }
    }
}

impl<'a> FromIterator<&'a str> for ItemSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(labels: I) -> Self {
        labels.into_iter().map(ItemLabel::from).collect()
    }
}

/// Labels comma-joined in ascending order, matching the CSV cell format.
impl fmt::Display for ItemSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, label) in self.items.iter().enumerate() {
            if position > 0 {
                f.write_str(",")?;
            }
            f.write_str(label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn itemset(labels: &[&str]) -> ItemSet {
        labels.iter().copied().collect()
    }

    #[test]
    fn equality_ignores_construction_order() {
        let forward = itemset(&["beer", "bread", "milk"]);
        let backward = itemset(&["milk", "bread", "beer"]);
        assert_eq!(forward, backward);

        let mut set = HashSet::new();
        set.insert(forward);
        assert!(set.contains(&backward));
    }

    #[test]
    fn duplicates_collapse() {
        assert_eq!(itemset(&["milk", "milk", "bread"]), itemset(&["bread", "milk"]));
        let extended = ItemSet::singleton("milk").with("milk");
        assert_eq!(extended.len(), 1);
    }

    #[test]
    fn with_keeps_labels_sorted() {
        let set = ItemSet::singleton("milk").with("beer").with("diapers");
        assert_eq!(set.labels(), ["beer", "diapers", "milk"]);
    }

    #[test]
    fn order_is_cardinality_then_lexicographic() {
        let milk = itemset(&["milk"]);
        let beer_diapers = itemset(&["beer", "diapers"]);
        let bread_milk = itemset(&["bread", "milk"]);
        let triple = itemset(&["bread", "diapers", "milk"]);

        assert!(milk < beer_diapers);
        assert!(beer_diapers < bread_milk);
        assert!(bread_milk < triple);

        let mut sets = vec![
            triple.clone(),
            bread_milk.clone(),
            milk.clone(),
            beer_diapers.clone(),
        ];
        sets.sort();
        assert_eq!(sets, vec![milk, beer_diapers, bread_milk, triple]);
    }

    #[test]
    fn intersection_and_exclusion() {
        let left = itemset(&["beer", "bread", "milk"]);
        let right = itemset(&["bread", "diapers", "milk"]);

        assert_eq!(left.intersection(&right), itemset(&["bread", "milk"]));
        assert_eq!(left.exclusion(&right), itemset(&["beer"]));
        assert_eq!(right.exclusion(&left), itemset(&["diapers"]));
        assert!(left.exclusion(&left).is_empty());
    }

    #[test]
    fn union_of_merges_all_labels() {
        let sets = [
            itemset(&["beer"]),
            itemset(&["bread", "milk"]),
            itemset(&["milk"]),
        ];
        assert_eq!(ItemSet::union_of(&sets), itemset(&["beer", "bread", "milk"]));
    }

    #[test]
    fn display_is_comma_joined_ascending() {
        assert_eq!(itemset(&["milk", "bread", "diapers"]).to_string(), "bread,diapers,milk");
        assert_eq!(ItemSet::singleton("beer").to_string(), "beer");
    }
}
