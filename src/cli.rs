use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cdg")]
#[command(about = "Class Dependency Graph")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the recompilation order for a class
    Order {
        /// Dependency declaration file (each line: a class followed by the
        /// classes it depends on, whitespace-separated)
        file: PathBuf,
        /// Class to recompile
        class: String,
        /// Emit the order as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display the directed graph built from a declaration file
    Graph {
        /// Dependency declaration file
        file: PathBuf,
        /// Emit the adjacency table as JSON
        #[arg(long)]
        json: bool,
    },
}
