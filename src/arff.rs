//! Loader for the sparse boolean attribute format used by the input
//! files: `attribute` lines declare item labels between single quotes,
//! and each data row lists one `t`/`f` cell per declared attribute.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::Transaction;

pub fn read_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let file = File::open(path)?;
    parse_transactions(BufReader::new(file))
}

/// Parses transactions from a reader.
///
/// Lines containing `#` or shorter than two characters are skipped, as
/// are `@` header lines without an attribute declaration (`@relation`,
/// `@data`). An `attribute` line contributes the label between its first
/// pair of single quotes; declaration order assigns the data column. In
/// a data row, a cell whose trimmed value is `t` (case-insensitive)
/// puts the attribute at that column into the transaction.
pub fn parse_transactions<R: BufRead>(reader: R) -> Result<Vec<Transaction>> {
    let mut attributes: Vec<String> = Vec::new();
    let mut transactions: Vec<Transaction> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.contains('#') || line.len() < 2 {
            continue;
        }
        if line.contains("attribute") {
            if let Some(label) = quoted_label(&line) {
                attributes.push(label.to_string());
            }
        } else if line.starts_with('@') {
            continue;
        } else {
            let mut transaction = Transaction::new();
            for (column, cell) in line.split(',').enumerate() {
                if cell.trim().eq_ignore_ascii_case("t") {
                    let label = attributes.get(column).ok_or(Error::UnknownAttribute {
                        column,
                        declared: attributes.len(),
                    })?;
                    transaction.insert(label.clone());
                }
            }
            transactions.push(transaction);
        }
    }

    Ok(transactions)
}

/// The text between the first pair of single quotes, if the opening
/// quote is not at the start of the line.
fn quoted_label(line: &str) -> Option<&str> {
    let start = line.find('\'').filter(|&start| start > 0)?;
    let rest = &line[start + 1..];
    let end = rest.find('\'')?;
    Some(&rest[..end])
}
