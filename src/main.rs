//! Checks a proposed permutation against a graph pair and prints how many edges it
//! preserves together with the resulting score.

mod args;

use args::Args;
use clap::Parser;
use edge_match_score::{evaluate, io};
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    info!("Loading graphs from {}", args.graphs.display());
    let pair = io::read_graph_pair(&args.graphs)?;

    info!("Loading permutation from {}", args.answer.display());
    let permutation = io::read_permutation(&args.answer, pair.num_vertices())?;

    let evaluation = evaluate(&pair, &permutation)?;
    println!("{}", evaluation);

    Ok(())
}
