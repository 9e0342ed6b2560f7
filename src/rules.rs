pub mod search;

use std::fmt;

use crate::itemset::ItemSet;

/// One antecedent ⇒ consequent split of a frequent itemset. Antecedent
/// and consequent are disjoint and their union is the itemset the rule
/// was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub antecedent: ItemSet,
    pub consequent: ItemSet,
    /// `support_count(itemset) / support_count(antecedent)`, in [0, 1].
    pub confidence: f64,
    /// `support_count(itemset) / transaction_count`, in [0, 1].
    pub support: f64,
}

impl Rule {
    /// The frequent itemset this rule was split from.
    pub fn itemset(&self) -> ItemSet {
        ItemSet::union_of([&self.antecedent, &self.consequent])
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.antecedent, self.consequent)
    }
}

/// Rule generation parameters.
///
/// The confidence threshold is always validated, but only applied as an
/// output filter when `filter_by_confidence` is set. By default every
/// split is emitted with its confidence attached, leaving the cut to
/// the consumer.
#[derive(Debug, Clone)]
pub struct RuleParams {
    pub min_confidence: f64,
    pub filter_by_confidence: bool,
}

impl RuleParams {
    pub fn new(min_confidence: f64) -> Self {
        Self {
            min_confidence,
            filter_by_confidence: false,
        }
    }

    pub fn with_filter(mut self) -> Self {
        self.filter_by_confidence = true;
        self
    }
}
