use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lineage-map")]
#[command(about = "Classify lineage history and present-day position", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Answer store location (overrides the configuration file)
    #[arg(long, env = "LINEAGE_MAP_STORE", global = true)]
    pub store: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify historical answers given on the command line
    Classify {
        /// Indigenous lineage tied to this land (yes, no, unknown)
        #[arg(long)]
        indigenous: Option<String>,

        /// Ancestors enslaved, coercively indentured or forcibly transported
        #[arg(long)]
        forced: Option<String>,

        /// Direct ancestors arrived during an active colonial period
        #[arg(long)]
        arrived: Option<String>,

        /// Those ancestors materially enabled or enforced colonization
        #[arg(long)]
        participation: Option<String>,

        /// Arrival only after independence or full entrenchment
        #[arg(long = "post-entrenchment")]
        post_entrenchment: Option<String>,

        /// Origin country colonized others only after ancestors left
        #[arg(long = "origin-after")]
        origin_after: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Score present-day answers given on the command line
    Score {
        /// Wealth from property speculation, rent or resource rights
        #[arg(long)]
        wealth: Option<String>,

        /// Decision-making or profit role in extractive institutions
        #[arg(long)]
        role: Option<String>,

        /// Living under economic constraint
        #[arg(long)]
        constrained: Option<String>,

        /// Lineage arrived under survival duress
        #[arg(long)]
        compelled: Option<String>,

        /// Settler ancestors whose benefit never reached you
        #[arg(long = "no-benefit")]
        no_benefit: Option<String>,

        /// Migration motive (opportunity, mixed, survival, unknown)
        #[arg(long)]
        motive: Option<String>,

        /// Infrastructure 2.0 stance, 0 (oppose) to 4 (strongly support)
        #[arg(long, allow_negative_numbers = true)]
        infra: Option<i64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Set one stored answer and show the recomputed result
    Answer {
        /// Question id (see `lineage-map questions`)
        id: String,

        /// New value
        value: String,
    },

    /// Show results for the stored answers
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Clear stored answers
    Reset {
        #[arg(value_enum, default_value = "historical")]
        scope: ResetTarget,
    },

    /// List all survey questions
    Questions,

    /// Write the full decision table for one classifier
    Export {
        #[arg(value_enum)]
        table: ExportTable,

        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormatArg,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show how often each category occurs across all possible answers
    Stats,

    /// Print a shareable summary of the stored answers
    Share {
        /// Also copy the summary to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormatArg {
    Csv,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportTable {
    Historical,
    Woke,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ResetTarget {
    Historical,
    Woke,
    All,
}
