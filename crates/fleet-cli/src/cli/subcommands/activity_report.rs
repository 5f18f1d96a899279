use clap::Subcommand;
use std::path::PathBuf;

/// Employee weekly activity report commands.
///
/// Reports carry nested task rows with sign-offs, so create and update read
/// a JSON file. `flt template activity_report` prints a starter payload.
#[derive(Clone, Debug, Subcommand)]
pub enum ActivityReportCommands {
    /// Create a report from a JSON payload file.
    Create {
        /// Path to the JSON payload (`-` for stdin).
        #[arg(long)]
        file: PathBuf,
    },
    /// Get one report by id.
    Get { id: String },
    /// List reports.
    List {
        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Replace a report with a JSON payload file.
    Update {
        id: String,
        /// Path to the JSON payload (`-` for stdin).
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete a report by id.
    Delete { id: String },
}
