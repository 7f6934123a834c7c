//! cooccur CLI: find frequently co-purchased items in checkout data.

use clap::Parser;
use cooccur::apriori::config::{DEFAULT_MAX_COMBO_SIZE, DEFAULT_MIN_SET_SIZE, DEFAULT_SIGMA};
use cooccur::io::{default_output_path, read_transactions, write_csv_file};
use cooccur::{mine_frequent_itemsets, MiningConfig, TransactionStore};
use log::LevelFilter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "cooccur")]
#[command(about = "Find frequently co-purchased items in supermarket checkout data")]
#[command(version)]
struct Cli {
    /// A file with one purchase per line, each a space-separated list of PLU codes
    input_file: PathBuf,

    /// Minimum number of times a set of items must co-occur
    #[arg(long, default_value_t = DEFAULT_SIGMA)]
    sigma: usize,

    /// Size of the smallest sets to write to the output file
    #[arg(long = "min_set_size", alias = "min-set-size", default_value_t = DEFAULT_MIN_SET_SIZE)]
    min_set_size: usize,

    /// Largest subset size checked before counting a candidate (speed only)
    #[arg(long = "max_combo_size", alias = "max-combo-size", default_value_t = DEFAULT_MAX_COMBO_SIZE)]
    max_combo_size: usize,

    /// Output file (defaults to <input>_sigma<sigma>_setsize<min_set_size>.csv)
    #[arg(short, long = "output_filename", alias = "output-filename")]
    output_filename: Option<PathBuf>,

    /// Log per-level counters
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(buf, "[{}] {}", record.level(), record.args())
    });
    builder.parse_default_env();
    let _ = builder.try_init();
}

fn run(cli: &Cli) -> Result<(), cooccur::CooccurError> {
    let config = MiningConfig::new(cli.sigma, cli.min_set_size)
        .with_max_combo_size(cli.max_combo_size);
    config.validate()?;

    let output = cli
        .output_filename
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input_file, config.sigma, config.min_set_size));

    let store: TransactionStore<u64> = read_transactions(&cli.input_file)?;

    let start = Instant::now();
    let itemsets = mine_frequent_itemsets(&store, &config)?;
    log::info!(
        "mined {} itemsets in {:.2?} (sigma={}, min_set_size={}, max_combo_size={})",
        itemsets.len(),
        start.elapsed(),
        config.sigma,
        config.min_set_size,
        config.max_combo_size
    );

    write_csv_file(&output, &itemsets)
}
