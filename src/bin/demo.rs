//! algokit Demo Binary
//!
//! Drives the symbol table, the priority queue and the sort routines
//! through a short scripted scenario and prints the results.

use std::path::PathBuf;

use algokit::config::ConfigBuilder;
use algokit::sorting::{quick_sort_with_rng, SortAlgorithm};
use algokit::{binary_search, AlgoError, BinarySearchTree, Config, MaxPriorityQueue, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::{fmt, EnvFilter};

/// algokit demo
#[derive(Parser, Debug)]
#[command(name = "algokit-demo")]
#[command(about = "Walk through the algokit data structures and sorts")]
#[command(version)]
struct Args {
    /// JSON config file (flags below override its values)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sort algorithm: selection, insertion, shell, merge, quick or heap
    #[arg(short, long)]
    algorithm: Option<SortAlgorithm>,

    /// Number of random values to sort
    #[arg(short = 'n', long)]
    sample_size: Option<usize>,

    /// Exclusive upper bound of the random values
    #[arg(short, long)]
    bound: Option<u32>,

    /// RNG seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Priority queue capacity
    #[arg(short = 'q', long)]
    queue_capacity: Option<usize>,
}

fn main() {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    fmt().with_env_filter(filter).with_target(true).init();

    tracing::info!("algokit demo v{}", algokit::VERSION);

    if let Err(e) = run(&config) {
        tracing::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

/// Merge the optional config file with command-line overrides
fn load_config(args: &Args) -> Result<Config> {
    let base = match &args.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };

    let mut builder = ConfigBuilder::from_config(base);
    if let Some(algorithm) = args.algorithm {
        builder = builder.sort_algorithm(algorithm);
    }
    if let Some(size) = args.sample_size {
        builder = builder.sample_size(size);
    }
    if let Some(bound) = args.bound {
        builder = builder.sample_bound(bound);
    }
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    if let Some(capacity) = args.queue_capacity {
        builder = builder.queue_capacity(capacity);
    }
    builder.build()
}

fn run(config: &Config) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    symbol_table_demo();

    let sample: Vec<u32> = (0..config.sample_size)
        .map(|i| (i as u32).saturating_add(rng.gen_range(0..config.sample_bound)))
        .collect();

    priority_queue_demo(config, &sample)?;
    sorting_demo(config, sample, &mut rng);
    Ok(())
}

fn symbol_table_demo() {
    let mut table = BinarySearchTree::new();
    table.put(1, 2);
    table.put(2, 4);
    table.put(3, 9);
    table.put(4, 16);
    for key in table.keys() {
        println!("key: {}", key);
    }

    println!("get(3): {:?}", table.get(&3));
    table.put(3, 3);
    println!("get(3): {:?}", table.get(&3));
    table.delete(&3);

    for key in [6, 10, 20, 15, 12, 7] {
        table.put(key, 25);
    }
    for key in table.keys() {
        println!("key: {}", key);
    }
    tracing::debug!(
        "Symbol table holds {} keys, height {}",
        table.size(),
        table.height()
    );
}

fn priority_queue_demo(config: &Config, sample: &[u32]) -> Result<()> {
    let mut pq = MaxPriorityQueue::new(config.queue_capacity);
    for &value in sample {
        match pq.insert(value) {
            Ok(()) => {}
            Err(AlgoError::CapacityExceeded { capacity }) => {
                tracing::warn!("Queue full at {} elements, skipping the rest", capacity);
                break;
            }
            Err(e) => return Err(e),
        }
    }

    let mut drained = Vec::with_capacity(pq.size());
    while !pq.is_empty() {
        drained.push(pq.retrieve_max()?);
    }
    println!("retrieve_max order: {:?}", drained);
    Ok(())
}

fn sorting_demo(config: &Config, mut sample: Vec<u32>, rng: &mut StdRng) {
    println!("unsorted: {:?}", sample);
    let needle = sample.first().copied();

    match config.sort_algorithm {
        // Reuse the seeded RNG so quick sort runs are reproducible too
        SortAlgorithm::Quick => {
            tracing::debug!("Sorting {} items with seeded quick sort", sample.len());
            quick_sort_with_rng(&mut sample, rng);
            tracing::debug!("Finished seeded quick sort of {} items", sample.len());
        }
        algorithm => algorithm.sort(&mut sample),
    }
    println!("{} sort: {:?}", config.sort_algorithm, sample);

    if let Some(needle) = needle {
        println!(
            "binary_search({}): {:?}",
            needle,
            binary_search(&sample, &needle)
        );
    }
}
