//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};

use crate::application::Value;
use crate::domain::TraversalOrder;

/// Binary container tree: structural-balance insertion, traversals and reports
#[derive(Parser, Debug)]
#[command(name = "bintree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Config file (overrides the global config)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Build the tree from these values, in insertion order (default: random tree)
    #[arg(long, global = true, value_delimiter = ',', allow_hyphen_values = true)]
    pub values: Vec<Value>,

    /// Seed for the random tree
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Number of random values
    #[arg(long, global = true)]
    pub count: Option<usize>,

    /// Random values are drawn from [0, MAX]
    #[arg(long, global = true)]
    pub max: Option<Value>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Draw the tree and list its traversals (default)
    Show {
        /// Show path labels next to values
        #[arg(long)]
        paths: bool,
    },

    /// Print traversal orders
    Traverse {
        /// Order to print
        #[arg(value_enum, default_value_t = OrderArg::All)]
        order: OrderArg,
        /// Prefix each value with its position in the tour
        #[arg(short, long)]
        numbered: bool,
    },

    /// Show size, height, leaves and value statistics
    Stats,

    /// Print the complete report
    Report,

    /// List leaves
    Leaves,

    /// List nodes by number of children
    Nodes {
        #[arg(value_enum, default_value_t = ChildrenArg::Any)]
        children: ChildrenArg,
    },

    /// List the subtree rooted at a value
    Subtree {
        #[arg(allow_hyphen_values = true)]
        value: Value,
    },

    /// Check whether a value exists
    Contains {
        #[arg(allow_hyphen_values = true)]
        value: Value,
    },

    /// Tree height, or the depth of a value
    Height {
        #[arg(allow_hyphen_values = true)]
        value: Option<Value>,
    },

    /// Insert values, then show the tree
    Add {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        values: Vec<Value>,
    },

    /// Remove values, then show the tree
    Remove {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        values: Vec<Value>,
    },

    /// Check structure integrity and balance
    Validate,

    /// Interactive session (add/remove/contains/height ...)
    Shell,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config path
    Path,

    /// Print config template
    Init,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderArg {
    Pre,
    In,
    Post,
    All,
}

impl OrderArg {
    pub fn orders(&self) -> Vec<TraversalOrder> {
        match self {
            OrderArg::Pre => vec![TraversalOrder::Pre],
            OrderArg::In => vec![TraversalOrder::In],
            OrderArg::Post => vec![TraversalOrder::Post],
            OrderArg::All => TraversalOrder::ALL.to_vec(),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildrenArg {
    /// Exactly one child
    One,
    /// Two children
    Two,
    /// At least one child
    Any,
}
