use clap::Subcommand;
use std::path::PathBuf;

/// Daily vehicle inspection commands.
///
/// Inspection items are grouped by vehicle area, so create and update read a
/// JSON file. `flt template daily_inspection` prints a starter payload.
#[derive(Clone, Debug, Subcommand)]
pub enum DailyInspectionCommands {
    /// Create an inspection from a JSON payload file.
    Create {
        /// Path to the JSON payload (`-` for stdin).
        #[arg(long)]
        file: PathBuf,
    },
    /// Get one inspection by id.
    Get { id: String },
    /// List inspections.
    List {
        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Replace an inspection with a JSON payload file.
    Update {
        id: String,
        /// Path to the JSON payload (`-` for stdin).
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete an inspection by id.
    Delete { id: String },
}
