// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use clap::Parser;
use combi_search::SubsetSearch;

/// Find the values summing to TARGET, using as many of them as possible
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print search progress to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print search counters after the result
    #[arg(short, long)]
    stats: bool,

    /// Total to reach
    #[arg(allow_negative_numbers = true)]
    target: i64,

    /// Candidate values
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<i64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut search = SubsetSearch::new(cli.target, cli.values)?.with_verbose(cli.verbose);
    println!("Search space: {} combinations", search.search_space_size());

    if search.run() {
        let indices: Vec<String> = search
            .selected_indices()
            .iter()
            .map(|index| index.to_string())
            .collect();
        println!("Found: {}", search.display_string());
        println!("Indices: {}", indices.join(" "));
    } else {
        println!("No combination found");
    }

    if cli.stats {
        for (name, value) in search.statistics().iter() {
            println!("{}: {}", name, value);
        }
    }

    Ok(())
}
