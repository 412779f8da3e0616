use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[clap(author, version)]
#[clap(name = "UCT Search Tree Client")]
#[clap(about = "Grows a search tree for the random sample game", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Grow(GrowCommand),
}

#[derive(Args)]
pub struct GrowCommand {
    /// HOCON file with a `grow` section.
    #[clap(short, long)]
    pub config: Option<String>,

    /// Number of growth steps, overriding the config.
    #[clap(short, long)]
    pub grows: Option<usize>,

    /// Print the whole tree after growing.
    #[clap(short, long)]
    pub print_tree: bool,

    /// Print the summary as JSON.
    #[clap(long)]
    pub json: bool,
}
