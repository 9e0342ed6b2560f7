use std::path::PathBuf;

use clap::Parser;
use log::info;

use tidmine::{
    association_rules_csv, frequent_itemsets, frequent_itemsets_csv, generate_rules, RuleParams,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Mine frequent itemsets and association rules from market-basket transactions")]
struct Cli {
    /// Input file with transactions (sparse boolean attribute format).
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Support threshold in (0, 1].
    #[arg(short, long, value_name = "FLOAT")]
    support: f64,

    /// Confidence threshold in (0, 1]; when given, association rules are
    /// generated instead of frequent itemsets.
    #[arg(short, long, value_name = "FLOAT")]
    confidence: Option<f64>,

    /// Upper bound on the size of mined itemsets.
    #[arg(long, value_name = "INT")]
    max_size: Option<usize>,

    /// Drop rules whose confidence is below the threshold.
    #[arg(long)]
    filter_confidence: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();

    let transactions = tidmine::arff::read_transactions(&args.file)?;
    info!(
        "loaded {} transactions from {}",
        transactions.len(),
        args.file.display()
    );

    let frequent = frequent_itemsets(&transactions, args.support, args.max_size)?;
    info!("mined {} frequent itemsets", frequent.len());

    match args.confidence {
        Some(min_confidence) => {
            let mut params = RuleParams::new(min_confidence);
            if args.filter_confidence {
                params = params.with_filter();
            }
            let rules = generate_rules(&frequent, &params)?;
            info!("derived {} association rules", rules.len());
            print!("{}", association_rules_csv(&rules));
        }
        None => {
            print!("{}", frequent_itemsets_csv(&frequent));
        }
    }

    Ok(())
}
