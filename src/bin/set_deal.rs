//! Deal a Set table and look for a set on it.
use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use log::info;

use set_core::{describe_cards, generate_deck, DealConfig, Dealer, RngKind, SetSearch};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Generator {
    /// Reference Mulberry32 generator.
    Mulberry32,
    /// ChaCha8 stream.
    Chacha8,
}

impl From<Generator> for RngKind {
    fn from(generator: Generator) -> Self {
        match generator {
            Generator::Mulberry32 => RngKind::Mulberry32,
            Generator::Chacha8 => RngKind::ChaCha8,
        }
    }
}

#[derive(Debug, Parser)]
struct Cli {
    /// Seed for the deal.
    #[clap(long, short, default_value_t = 42)]
    seed: u32,
    /// Cards on a fresh table.
    #[clap(long, short, default_value_t = set_core::core::TABLE_SIZE)]
    count: usize,
    /// Table size to extend to when the fresh table holds no set.
    #[clap(long, default_value_t = set_core::core::EXTENDED_TABLE_SIZE)]
    extended: usize,
    /// Random generator backing the deal.
    #[clap(long, value_enum, default_value_t = Generator::Mulberry32)]
    rng: Generator,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp(None)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if cli.extended < cli.count {
        bail!("extended table size {} is smaller than {}", cli.extended, cli.count);
    }

    let config = DealConfig::default()
        .with_seed(cli.seed)
        .with_rng(cli.rng.into())
        .with_table_sizes(cli.count, cli.extended);
    let dealer = Dealer::new(config);

    let mut deck = generate_deck();
    let table = dealer.deal_table(&mut deck);
    info!("Dealt {} cards with seed {}, {} left in deck", table.len(), cli.seed, deck.len());
    println!("{}", describe_cards(&table));

    let mut search = SetSearch::default();
    match search.find(&table) {
        Some(set) => println!("\nSet:\n{}", describe_cards(&set)),
        None => println!("\nNo set"),
    }
    info!("Search stats: {:?}", search.stats());

    Ok(())
}
