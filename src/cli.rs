use crate::sort::SortKey;
use clap::Parser;
use std::path::PathBuf;

/// Enumerates Lambda functions from every region with usage metadata.
#[derive(Debug, Parser)]
#[command(name = "list-lambdas", version, about)]
pub struct Cli {
    /// Only list functions inactive for at least this many days
    /// (never-invoked functions always match).
    #[arg(long, value_name = "DAYS")]
    pub inactive_days_filter: Option<u32>,

    /// Print the extended column set instead of the summary.
    #[arg(long)]
    pub all: bool,

    /// Column to sort the results by.
    #[arg(long, value_enum, value_name = "COLUMN", default_value_t = SortKey::Region)]
    pub sort_by: SortKey,

    /// Reverse the sort order. Never-invoked functions stay first either way.
    #[arg(long)]
    pub descending: bool,

    /// Write the full column set as CSV to this path, overwriting any
    /// existing file.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// AWS access key id (default: from local configuration).
    #[arg(long, value_name = "KEY", requires = "token_secret")]
    pub token_key_id: Option<String>,

    /// AWS secret access key (default: from local configuration).
    #[arg(long, value_name = "SECRET", requires = "token_key_id")]
    pub token_secret: Option<String>,

    /// Named AWS credentials profile (default: from local configuration).
    #[arg(long, value_name = "NAME", conflicts_with_all = ["token_key_id", "token_secret"])]
    pub profile: Option<String>,

    /// How many days of invocation metrics to look back over.
    #[arg(long, value_name = "DAYS", default_value_t = 90)]
    pub lookback_days: u32,
}
