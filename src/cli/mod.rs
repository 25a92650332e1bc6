//! CLI module for the Cliente API
//!
//! Provides subcommands for running the service:
//! - `serve`: HTTP API server

pub mod serve;

use clap::{Parser, Subcommand};

/// Cliente API - customer management over HTTP
#[derive(Parser)]
#[command(name = "cliente-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve(serve::ServeArgs),
}
