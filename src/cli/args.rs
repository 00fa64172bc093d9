//! Command-line argument parsing for EcoBuddy
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// EcoBuddy - rule-based crypto advisor and garment triage in the terminal
#[derive(Parser, Debug)]
#[command(name = "ecobuddy")]
#[command(version = "0.2.0")]
#[command(about = "Terminal sustainability advisor", long_about = None)]
pub struct Args {
    /// Verbosity level: default (normal), -v (verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand; defaults to the interactive chat
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive crypto advisor chat
    Chat,

    /// Classify a garment photo and print a reuse recommendation
    Classify {
        /// Path to the image to classify
        #[arg(value_name = "IMAGE")]
        image: PathBuf,

        /// Model artifact directory (overrides config)
        #[arg(long)]
        model: Option<PathBuf>,
    },

    /// Print the coin dataset
    Coins,

    /// Run system diagnostics and health checks
    Doctor,

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose == 0 {
            Verbosity::Normal
        } else {
            Verbosity::Verbose
        }
    }
}

impl Verbosity {
    /// Check if progress spinners should be shown
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Check if detailed output should be shown
    pub fn show_details(&self) -> bool {
        matches!(self, Verbosity::Verbose)
    }
}
