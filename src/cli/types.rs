//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::init::InitArgs;
use super::commands::render::RenderArgs;

#[derive(Parser, Debug)]
#[command(name = "pmaconf")]
#[command(about = "Server connection profile for a containerized phpMyAdmin", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Settings file (defaults to ./pmaconf.yaml and ./pmaconf.local.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default settings file
    Init(InitArgs),

    /// Print the loaded profile with secrets redacted
    Show,

    /// Load settings and secret files, reporting anything suspicious
    Check,

    /// Re-express the profile as PHP, env vars or YAML
    Render(RenderArgs),
}
