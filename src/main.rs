use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bstree::Tree;
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bstree", about = "Build a binary search tree and inspect or reshape it")]
struct Cli {
    /// Label printed ahead of every rendering.
    #[arg(long, default_value = "Tree")]
    label: String,

    /// Read keys from a file (whitespace separated) before any positional keys.
    #[arg(long)]
    keys_file: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct KeyArgs {
    /// Keys to insert, in order.
    #[arg(allow_negative_numbers = true)]
    keys: Vec<i64>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the vertical view, one node per line.
    Show(KeyArgs),
    /// Print keys in order on one line.
    Inorder(KeyArgs),
    /// Print every root-to-leaf path.
    Paths(KeyArgs),
    /// Count the nodes at one depth (root is 0).
    Level {
        /// Depth to count.
        level: usize,
        #[command(flatten)]
        keys: KeyArgs,
    },
    /// Count nodes that root an ordered subtree.
    CountBst(KeyArgs),
    /// Print the in-order successor of a key.
    Successor {
        /// Key whose successor is wanted.
        #[arg(allow_negative_numbers = true)]
        key: i64,
        #[command(flatten)]
        keys: KeyArgs,
    },
    /// Mirror the tree and print the vertical view.
    Flip(KeyArgs),
    /// Rebalance the tree and print the vertical view.
    Balance(KeyArgs),
    /// Print a structural summary.
    Stats(KeyArgs),
}

impl Commands {
    fn keys(&self) -> &[i64] {
        let args = match self {
            Commands::Show(args)
            | Commands::Inorder(args)
            | Commands::Paths(args)
            | Commands::CountBst(args)
            | Commands::Flip(args)
            | Commands::Balance(args)
            | Commands::Stats(args) => args,
            Commands::Level { keys, .. } | Commands::Successor { keys, .. } => keys,
        };
        &args.keys
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut keys = match &cli.keys_file {
        Some(path) => read_keys_file(path)?,
        None => Vec::new(),
    };
    keys.extend_from_slice(cli.command.keys());
    debug!(count = keys.len(), label = %cli.label, "building tree");

    let mut tree = Tree::from_vec(keys, cli.label);

    match cli.command {
        Commands::Show(_) => print!("{}", tree),
        Commands::Inorder(_) => println!("{}", tree.in_order_string()),
        Commands::Paths(_) => tree.print_all_paths().context("failed to write paths")?,
        Commands::Level { level, .. } => println!("{}", tree.nodes_in_level(level)),
        Commands::CountBst(_) => println!("{}", tree.count_bst()),
        Commands::Successor { key, .. } => {
            let node = tree
                .get_by_key(&key)
                .ok_or_else(|| anyhow::anyhow!("key {} is not in the tree", key))?;
            match tree.in_order_successor(node.id())? {
                Some(next) => println!("{}", next.key()),
                None => println!("{} is the largest key", key),
            }
        }
        Commands::Flip(_) => {
            tree.flip();
            print!("{}", tree);
        }
        Commands::Balance(_) => {
            tree.balance_tree();
            print!("{}", tree);
        }
        Commands::Stats(_) => println!("{}", tree.stats().report()),
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_keys_file(path: &Path) -> Result<Vec<i64>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read keys from {}", path.display()))?;

    contents
        .split_whitespace()
        .enumerate()
        .map(|(idx, token)| {
            token.parse::<i64>().with_context(|| {
                format!(
                    "invalid key '{}' (entry {}) in {}",
                    token,
                    idx + 1,
                    path.display()
                )
            })
        })
        .collect()
}
