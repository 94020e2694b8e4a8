use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::platform::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(name = "pulsemon")]
#[command(about = "Progress display for work spread over separate worker processes")]
#[command(version)]
pub struct Cli {
    /// RON configuration file (defaults to ./pulsemon.ron when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Where log output goes
    #[arg(long, value_enum, global = true)]
    pub log: Option<LogDestination>,

    /// Log debug messages
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open a progress session and show it until every step is done
    Serve {
        /// Title shown in front of the completion percentage
        #[arg(short, long, default_value = "Progress: ")]
        title: String,

        /// Total number of steps
        #[arg(short = 'n', long)]
        total: u64,

        /// Steps represented by one pulse
        #[arg(short, long, default_value = "1")]
        step: u64,

        /// Indicator width
        #[arg(long)]
        width: Option<u32>,

        /// Indicator height
        #[arg(long)]
        height: Option<u32>,
    },

    /// Send progress pulses to a running session
    Pulse {
        /// Host running the session
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port printed by `serve`
        #[arg(short, long)]
        port: u16,

        /// Number of pulses to send
        #[arg(short = 'n', long, default_value = "1")]
        count: u64,
    },

    /// Classify a drop payload made of files and/or text
    Classify {
        /// Dropped file (repeatable)
        #[arg(short, long = "file")]
        files: Vec<PathBuf>,

        /// Dropped text
        #[arg(short, long)]
        text: Option<String>,
    },
}
