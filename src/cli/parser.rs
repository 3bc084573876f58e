use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftclock
#[derive(Parser)]
#[command(
    name = "shiftclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Derive a weekly night-shift schedule from a few rules and print it as a grid or a clock face",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (JSON, or YAML with .yaml/.yml)
    #[arg(global = true, long = "config", short = 'c', value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write an example configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration for errors and warnings")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the day category of every weekday
    Classify,

    /// Print the weekly grid (48 half-hour slots x 7 days)
    Show {
        #[arg(long, help = "Do not color cells")]
        plain: bool,

        #[arg(long, help = "Append weekly hours per activity")]
        totals: bool,
    },

    /// Print clock-face segments of one pattern, or of all patterns
    Clock {
        #[arg(long, short = 'p', value_name = "TITLE", help = "Pattern title")]
        pattern: Option<String>,

        #[arg(long, help = "Also list off-the-hour boundary markers")]
        markers: bool,
    },

    /// Show what is scheduled right now
    Now {
        #[arg(long, value_name = "WEEKDAY", help = "Use this weekday instead of today")]
        day: Option<String>,

        #[arg(long, value_name = "HHMM", help = "Use this time instead of the current time")]
        at: Option<String>,
    },

    /// Export the weekly grid
    Export {
        #[arg(long, value_enum, help = "Output format (default: from file extension)")]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
