use crate::export::ExportFormat;
use clap::{ArgAction, Args, Parser, Subcommand};

/// Command-line interface definition for opsdash
#[derive(Parser)]
#[command(
    name = "opsdash",
    version = env!("CARGO_PKG_VERSION"),
    about = "Operations dashboard for hospitality teams: reservations, call logs, KPIs and exports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Increase diagnostic output (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Row selection shared by the dashboard, feed and export commands.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// today | 7d | 30d | month | all | YYYY | YYYY-MM | YYYY-MM-DD | A:B
    #[arg(long, short = 'r')]
    pub range: Option<String>,

    /// First day of a custom range (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", conflicts_with = "range")]
    pub from: Option<String>,

    /// Last day of a custom range (YYYY-MM-DD), defaults to today
    #[arg(long, value_name = "DATE", requires = "from")]
    pub to: Option<String>,

    /// Property id, or __all__ (overrides the saved preference)
    #[arg(long, short = 'p')]
    pub property: Option<String>,

    /// Case-insensitive text search over every field
    #[arg(long, short = 's')]
    pub search: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the local record store
    Init {
        /// Email of the account allowed to sign in
        #[arg(long = "admin", value_name = "EMAIL")]
        admin: Option<String>,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "List keys missing from the configuration file")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Import a JSON array of records into the local store
    Import {
        /// reservations | call_logs
        #[arg(long)]
        table: String,

        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Request a sign-in link, or complete sign-in with its token
    Login {
        #[arg(long, conflicts_with = "token", required_unless_present = "token")]
        email: Option<String>,

        #[arg(long)]
        token: Option<String>,
    },

    /// Sign out and close the session gate
    Logout,

    /// Show session, source and preference status
    Status,

    /// Render KPIs, charts and the event feed
    Dashboard {
        #[command(flatten)]
        filters: FilterArgs,

        /// Maximum feed rows (defaults to feed_limit from the config)
        #[arg(long)]
        limit: Option<usize>,

        /// dark | light | plain (this run only)
        #[arg(long)]
        theme: Option<String>,
    },

    /// Print only the event feed
    Feed {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long)]
        limit: Option<usize>,

        /// Print the feed as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export the filtered rows
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file (default: timestamped name in export_dir)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// View or change saved preferences
    Prefs {
        #[arg(long)]
        theme: Option<String>,

        #[arg(long)]
        property: Option<String>,

        #[arg(long, help = "Restore default preferences")]
        reset: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long, default_value_t = 50)]
        limit: usize,
    },
}
