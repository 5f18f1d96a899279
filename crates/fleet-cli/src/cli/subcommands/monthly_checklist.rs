use clap::Subcommand;
use std::path::PathBuf;

/// Monthly vehicle maintenance checklist commands.
///
/// The checklist payload is nested (per-item status rows), so create and
/// update read a JSON file. `flt template monthly_checklist` prints a
/// starter payload.
#[derive(Clone, Debug, Subcommand)]
pub enum MonthlyChecklistCommands {
    /// Create a checklist from a JSON payload file.
    Create {
        /// Path to the JSON payload (`-` for stdin).
        #[arg(long)]
        file: PathBuf,
    },
    /// Get one checklist by id.
    Get { id: String },
    /// List checklists.
    List {
        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Replace a checklist with a JSON payload file.
    Update {
        id: String,
        /// Path to the JSON payload (`-` for stdin).
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete a checklist by id.
    Delete { id: String },
}
