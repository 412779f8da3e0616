mod cli;
mod options;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, GrowCommand};
use common::{ConfigLoader, FsExt};
use dotenv::dotenv;
use env_logger::Env;
use itertools::Itertools;
use log::info;
use options::GrowOptions;
use random_game::RandomGame;
use serde::Serialize;
use uct::SearchTree;

const CONFIG_SCOPE: &str = "grow";

#[derive(Serialize, Debug)]
struct Summary {
    grows: usize,
    nodes: usize,
    depth: usize,
    root_score: f32,
    root_weight: f32,
    principal_variation: Vec<String>,
}

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Grow(grow_args) => grow(grow_args)?,
    }

    Ok(())
}

fn grow(args: &GrowCommand) -> Result<()> {
    let config = match &args.config {
        Some(path) => ConfigLoader::new(path.relative_to_cwd()?, CONFIG_SCOPE.to_string())?,
        None => ConfigLoader::empty(CONFIG_SCOPE.to_string()),
    };

    let mut options: GrowOptions = config.load()?;
    if let Some(grows) = args.grows {
        options.grows = grows;
    }
    options.print_tree |= args.print_tree;

    info!("{:?}", options);

    let mut tree = SearchTree::<RandomGame>::new();
    let max_depth = tree.grow_n(options.grows)?;

    info!(
        "Grew {} times, deepest expansion at depth {}",
        options.grows, max_depth
    );

    if options.print_tree {
        print!("{}", tree);
    }

    let summary = Summary {
        grows: options.grows,
        nodes: tree.len(),
        depth: tree.depth(),
        root_score: tree.root().score(),
        root_weight: tree.root().expansion_weight(),
        principal_variation: tree
            .principal_variation()
            .into_iter()
            .map(|m| m.to_string())
            .collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        info!(
            "Nodes: {}, depth: {}, root score: {}, root weight: {}",
            summary.nodes, summary.depth, summary.root_score, summary.root_weight
        );
        info!(
            "Principal variation: [{}]",
            summary.principal_variation.iter().join(", ")
        );
    }

    Ok(())
}
