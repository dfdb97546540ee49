use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for weekledger
/// CLI application to track weekly working hours with SQLite
#[derive(Parser)]
#[command(
    name = "weekledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A weekly work-hour ledger: record start/end times and breaks, track the remaining balance against a weekly target",
    long_about = None
)]
pub struct Cli {
    /// Override store path (useful for tests or custom store)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the store and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record or update one weekday's entry
    Set {
        /// Weekday (mon..fri, full names accepted)
        day: String,

        /// Clock-in time (HH:MM)
        #[arg(long = "in", help = "Clock-in time (HH:MM)")]
        start: Option<String>,

        /// Clock-out time (HH:MM)
        #[arg(long = "out", help = "Clock-out time (HH:MM)")]
        end: Option<String>,

        /// Mark the lunch break as taken (deducts 60 minutes)
        #[arg(long = "lunch", help = "Lunch break taken (-60 min)")]
        lunch: bool,

        #[arg(
            long = "no-lunch",
            conflicts_with = "lunch",
            help = "Lunch break not taken"
        )]
        no_lunch: bool,

        /// Mark the dinner break as taken (deducts 30 minutes)
        #[arg(long = "dinner", help = "Dinner break taken (-30 min)")]
        dinner: bool,

        #[arg(
            long = "no-dinner",
            conflicts_with = "dinner",
            help = "Dinner break not taken"
        )]
        no_dinner: bool,
    },

    /// Show the week table with totals and running balance
    Show,

    /// Print or set the weekly target hours
    Target {
        /// New weekly target in hours (omit to print the current one)
        hours: Option<f64>,
    },

    /// Clear one weekday back to an empty entry
    Clear {
        /// Weekday (mon..fri, full names accepted)
        day: String,
    },

    /// Reset the whole week, keeping the weekly target
    Reset,

    /// Export the computed week to a file
    Export {
        #[arg(long = "format", value_enum, help = "Export format (json or csv)")]
        format: ExportFormat,

        #[arg(long = "output", help = "Absolute path of the output file")]
        output: String,

        #[arg(long = "force", help = "Overwrite the output file if it exists")]
        force: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
