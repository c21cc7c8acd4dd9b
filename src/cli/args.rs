//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::config::RenderStyle;

/// Family tree builder: parse parent:child declarations and find most recent common ancestors
#[derive(Parser, Debug)]
#[command(name = "famtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Directory holding a local .famtree.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub project_dir: Option<PathBuf>,

    /// Family tree file (default: the single matching file in the data directory)
    #[arg(short, long, global = true, env = "FAMTREE_FILE", value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the family tree
    Show {
        /// Output style (default: from settings)
        #[arg(short, long, value_enum)]
        style: Option<RenderStyle>,
    },

    /// Print the most recent common ancestor of two people
    Mrca {
        /// First person (default: query.first from settings)
        #[arg(requires = "second")]
        first: Option<String>,
        /// Second person (default: query.second from settings)
        second: Option<String>,
    },

    /// Print the ancestors of a person, nearest first
    Ancestors {
        /// Person to look up
        name: String,
    },

    /// Locate a person and show their generation
    Find {
        /// Person to look up
        name: String,
    },

    /// Print the tree followed by the default MRCA query
    Report,

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

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Show config file locations
    Path,
}
