//! CSV rendering of mining results: semicolon-separated columns, one
//! itemset or rule per line, item labels comma-joined ascending.

use std::fmt::Write;

use crate::itemsets::FrequentItemsets;
use crate::rules::Rule;

/// Rounds to two decimal places, half away from zero, and renders with
/// exactly two digits ("1.00", "0.50", "0.67").
pub fn format_metric(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{:.2}", rounded)
}

/// Renders frequent itemsets as `size;items` rows in itemset order.
pub fn frequent_itemsets_csv(frequent: &FrequentItemsets) -> String {
    let mut out = String::from("size;items\n");
    for (itemset, _) in frequent.iter() {
        let _ = writeln!(out, "{};{}", itemset.len(), itemset);
    }
    out
}

/// Renders rules as `antecedent;consequent;confidence;support` rows in
/// the order the generator produced them.
pub fn association_rules_csv(rules: &[Rule]) -> String {
    let mut out = String::from("antecedent;consequent;confidence;support\n");
    for rule in rules {
        let _ = writeln!(
            out,
            "{};{};{};{}",
            rule.antecedent,
            rule.consequent,
            format_metric(rule.confidence),
            format_metric(rule.support)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::itemsets::search::frequent_itemsets;
    use crate::rules::search::generate_rules;
    use crate::rules::RuleParams;
    use crate::types::Transaction;

    fn basket(labels: &[&str]) -> Transaction {
        labels.iter().map(|label| label.to_string()).collect()
    }

    fn market_frequent() -> FrequentItemsets {
        let transactions = vec![
            basket(&["bread", "milk"]),
            basket(&["beer", "bread", "diapers", "eggs"]),
            basket(&["beer", "cola", "diapers", "milk"]),
            basket(&["beer", "bread", "diapers", "milk"]),
            basket(&["bread", "cola", "diapers", "milk"]),
            basket(&["bread", "diapers", "milk"]),
        ];
        frequent_itemsets(&transactions, 0.5, None).unwrap()
    }

    #[test]
    fn metric_formatting_is_two_decimals_half_up() {
        assert_eq!(format_metric(1.0), "1.00");
        assert_eq!(format_metric(0.5), "0.50");
        assert_eq!(format_metric(2.0 / 3.0), "0.67");
        assert_eq!(format_metric(3.0 / 5.0), "0.60");
        // 0.125 is exact in binary; half-up gives 0.13 where banker's
        // rounding would give 0.12.
        assert_eq!(format_metric(0.125), "0.13");
        assert_eq!(format_metric(0.0), "0.00");
    }

    #[test]
    fn itemsets_render_in_itemset_order() {
        let expected = "\
size;items
1;beer
1;bread
1;diapers
1;milk
2;beer,diapers
2;bread,diapers
2;bread,milk
2;diapers,milk
3;bread,diapers,milk
";
        assert_eq!(frequent_itemsets_csv(&market_frequent()), expected);
    }

    #[test]
    fn rules_render_grouped_by_itemset() {
        let rules = generate_rules(&market_frequent(), &RuleParams::new(0.5)).unwrap();
        let expected = "\
antecedent;consequent;confidence;support
beer;diapers;1.00;0.50
diapers;beer;0.60;0.50
bread;diapers;0.80;0.67
diapers;bread;0.80;0.67
bread;milk;0.80;0.67
milk;bread;0.80;0.67
diapers;milk;0.80;0.67
milk;diapers;0.80;0.67
bread;diapers,milk;0.60;0.50
diapers;bread,milk;0.60;0.50
milk;bread,diapers;0.60;0.50
bread,diapers;milk;0.75;0.50
bread,milk;diapers;0.75;0.50
diapers,milk;bread;0.75;0.50
";
        assert_eq!(association_rules_csv(&rules), expected);
    }

    #[test]
    fn empty_results_render_headers_only() {
        let frequent = FrequentItemsets::default();
        assert_eq!(frequent_itemsets_csv(&frequent), "size;items\n");
        assert_eq!(
            association_rules_csv(&[]),
            "antecedent;consequent;confidence;support\n"
        );
    }
}
