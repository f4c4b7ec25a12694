use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for inspectlog
/// CLI application to track fire-safety inspections and their outcome
#[derive(Parser)]
#[command(
    name = "inspectlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track ongoing and completed inspections, bid vs actual hours and the weekly report",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage inspections in progress
    Ongoing {
        #[command(subcommand)]
        action: OngoingAction,
    },

    /// Manage completed inspections
    Completed {
        #[command(subcommand)]
        action: CompletedAction,
    },

    /// Show the report tables
    List {
        #[arg(long, conflicts_with = "completed", help = "Only the ongoing table")]
        ongoing: bool,

        #[arg(long, help = "Only the completed table")]
        completed: bool,

        #[arg(long, help = "Include the per-year history under each completed row")]
        history: bool,
    },

    /// Show or update the report notes
    Notes {
        #[arg(long, value_name = "TEXT", help = "Trends noticed")]
        trends: Option<String>,

        #[arg(long, value_name = "TEXT", help = "Resource challenges")]
        challenges: Option<String>,

        #[arg(long, value_name = "TEXT", help = "Suggested improvements")]
        improvements: Option<String>,
    },

    /// Show or update the report date range
    Range {
        #[arg(long, value_name = "YYYY-MM-DD")]
        start: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        end: Option<String>,
    },

    /// Export workbooks, the report document or the completed table
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, value_name = "DIR", help = "Output directory (default: config export_dir)")]
        dir: Option<String>,

        #[arg(long, value_name = "ID", help = "Only this completed inspection (xlsx)")]
        id: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite existing files")]
        force: bool,
    },

    /// Delete all ongoing and completed inspections and the report notes
    Clear {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum OngoingAction {
    /// Add an inspection in progress
    Add(OngoingFields),

    /// Update fields of an inspection in progress
    Edit {
        id: String,

        #[command(flatten)]
        fields: OngoingFields,
    },

    /// Delete an inspection in progress
    Del {
        id: String,

        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Move an inspection to completed, with its final figures
    Complete {
        id: String,

        #[command(flatten)]
        fields: CompletedFields,

        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum CompletedAction {
    /// Add a completed inspection
    Add(CompletedFields),

    /// Update fields of a completed inspection
    Edit {
        id: String,

        #[command(flatten)]
        fields: CompletedFields,
    },

    /// Delete a completed inspection
    Del {
        id: String,

        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Numbers are taken as text and coerced (blank or invalid → 0).
#[derive(Args, Debug, Clone, Default)]
pub struct OngoingFields {
    #[arg(long = "site")]
    pub site_name: Option<String>,

    #[arg(long = "project")]
    pub project_number: Option<String>,

    #[arg(long = "bid", value_name = "HOURS")]
    pub bid_hours: Option<String>,

    #[arg(long = "worked", value_name = "HOURS")]
    pub hours_worked: Option<String>,

    #[arg(long = "est", value_name = "YYYY-MM-DD")]
    pub est_completion: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CompletedFields {
    #[arg(long = "site")]
    pub site_name: Option<String>,

    #[arg(long = "project")]
    pub project_number: Option<String>,

    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub date_completed: Option<String>,

    #[arg(long = "bid", value_name = "HOURS")]
    pub bid_hours: Option<String>,

    #[arg(long = "actual", value_name = "HOURS")]
    pub actual_hours: Option<String>,

    #[arg(long = "price", value_name = "AMOUNT")]
    pub bid_price: Option<String>,

    #[arg(long)]
    pub discrepancies: Option<String>,

    #[arg(long)]
    pub deficiencies: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,

    #[arg(long = "report-sent", value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub report_sent: Option<bool>,

    /// Repeatable; rows with a blank part are dropped
    #[arg(long = "history", value_name = "YEAR:BID:ACTUAL:PRICE")]
    pub history: Vec<String>,

    #[arg(long = "clear-history", conflicts_with = "history")]
    pub clear_history: bool,
}
