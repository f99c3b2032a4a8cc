//! CLI module - Command-line interface for Wayfarr
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

pub use commands::{cmd_enrich_activities, cmd_enrich_destinations, cmd_providers};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Wayfarr - Travel recommendation enrichment service
/// Attaches provider images to AI-generated trip recommendations
#[derive(Parser)]
#[command(name = "wayfarr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enrich destination recommendations from a JSON file
    #[command(alias = "d")]
    Destinations {
        /// JSON file holding an array of destination records
        input: PathBuf,

        /// Write enriched records here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Images to fetch per record (1-4)
        #[arg(long)]
        images: Option<usize>,
    },

    /// Enrich trip activity recommendations from a JSON file
    #[command(alias = "a")]
    Activities {
        /// JSON file holding an array of activity records
        input: PathBuf,

        /// Write enriched records here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Images to fetch per activity
        #[arg(long)]
        images: Option<usize>,
    },

    /// Show provider credential status in fallback order
    Providers,

    /// Create default config file
    Init,
}
