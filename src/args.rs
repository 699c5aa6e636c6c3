use clap::Parser;
use std::path::PathBuf;

/// Score a proposed vertex correspondence between two graphs
#[derive(Parser, Debug)]
#[command(name = "check")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File holding N, M and the edge lists of both graphs
    #[arg(short = 'g', long, default_value = "graphs")]
    pub graphs: PathBuf,

    /// File holding the proposed permutation, one image per vertex
    #[arg(short = 'a', long, default_value = "ans")]
    pub answer: PathBuf,
}
