use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "primer", about = "Data structure and algorithm walk-throughs", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sort values and print the result.
    Sort {
        #[arg(long, value_enum)]
        algo: SortAlgo,
        #[arg(required = true)]
        values: Vec<i64>,
    },
    /// Sort values, then binary-search for a target.
    Search {
        target: i64,
        #[arg(required = true)]
        values: Vec<i64>,
    },
    /// Singly-linked list walk-through, ending with a reversal.
    List {
        #[arg(required = true)]
        values: Vec<i64>,
    },
    /// Insert values into a BST and print the traversal orders.
    Tree {
        #[arg(required = true)]
        values: Vec<i64>,
    },
    /// Build an undirected graph and traverse it.
    Graph {
        #[arg(long)]
        vertices: usize,
        /// Edge as "u,v"; repeatable.
        #[arg(long = "edge")]
        edges: Vec<String>,
        #[arg(long, default_value_t = 0)]
        start: usize,
        /// Print the edge-list snapshot as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// All primes up to a limit.
    Primes {
        limit: usize,
    },
    /// Reverse the decimal digits of a number.
    Reverse {
        n: i64,
    },
    /// Rotate values right by k places.
    Rotate {
        k: usize,
        #[arg(required = true)]
        values: Vec<i64>,
    },
    /// Time a sequential fill against the rayon-parallel one.
    Bench {
        #[arg(long, default_value_t = 10_000_000)]
        size: usize,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum SortAlgo {
    Insertion,
    Selection,
    Bubble,
    Quick,
}
