//! Frequent itemset mining and association rule generation for
//! market-basket transactions.
//!
//! The miner is a vertical variant of Apriori: every item carries a
//! tid-list (the ascending set of transaction indices containing it),
//! and the level-wise search tests each candidate itemset by
//! intersecting tid-lists instead of re-scanning transactions. Rules are
//! derived from every proper nonempty antecedent split of each frequent
//! itemset, carrying confidence and support.
//!
//! ```
//! use tidmine::{frequent_itemsets, generate_rules, ItemSet, RuleParams};
//! use tidmine::types::Transaction;
//!
//! let transactions: Vec<Transaction> = [
//!     vec!["bread", "milk"],
//!     vec!["bread", "diapers", "milk"],
//!     vec!["diapers", "milk"],
//! ]
//! .into_iter()
//! .map(|basket| basket.into_iter().map(String::from).collect())
//! .collect();
//!
//! let frequent = frequent_itemsets(&transactions, 0.5, None)?;
//! let diapers_milk: ItemSet = ["diapers", "milk"].into_iter().collect();
//! assert_eq!(frequent.support_count(&diapers_milk), 2);
//!
//! let rules = generate_rules(&frequent, &RuleParams::new(0.5))?;
//! assert!(!rules.is_empty());
//! # Ok::<(), tidmine::Error>(())
//! ```

pub mod arff;
pub mod error;
pub mod format;
pub mod itemset;
pub mod itemsets;
pub mod rules;
pub mod types;

pub use error::{Error, Result};
pub use format::{association_rules_csv, frequent_itemsets_csv};
pub use itemset::ItemSet;
pub use itemsets::search::frequent_itemsets;
pub use itemsets::FrequentItemsets;
pub use rules::search::generate_rules;
pub use rules::{Rule, RuleParams};
