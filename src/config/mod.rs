pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

#[cfg(feature = "cli")]
mod cli {
    use clap::{Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "title-match")]
    #[command(about = "Match and deduplicate credit card and offer titles")]
    pub struct CliConfig {
        /// Path to a TOML file with [thresholds] and [dedupe] tables
        #[arg(short, long, global = true)]
        pub config: Option<String>,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Log as JSON lines")]
        pub json_logs: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Compare two titles; exits 0 when similar, 1 when different
        Compare {
            a: String,
            b: String,

            /// Print the deciding step as JSON
            #[arg(long)]
            explain: bool,
        },

        /// Drop rows of a CSV whose title duplicates an earlier row
        Dedupe {
            #[arg(short, long)]
            input: String,

            /// Title column; overrides [dedupe].column
            #[arg(long)]
            column: Option<String>,

            /// Output CSV, stdout when omitted
            #[arg(short, long)]
            output: Option<String>,

            /// JSON report path; overrides [dedupe].report_path
            #[arg(long)]
            report: Option<String>,
        },
    }
}
