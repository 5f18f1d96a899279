use clap::Subcommand;

/// Vehicle movement register commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MovementRegisterCommands {
    /// Create a movement register entry. The distance (`km`) is derived from
    /// the meter readings.
    Create {
        #[arg(long)]
        veh_number: String,
        #[arg(long)]
        month: String,
        #[arg(long)]
        week: String,
        /// Period start (YYYY-MM-DD or DD-MM-YYYY).
        #[arg(long)]
        date_from: String,
        /// Period end (YYYY-MM-DD or DD-MM-YYYY).
        #[arg(long)]
        date_to: String,
        #[arg(long)]
        meter_start: u32,
        #[arg(long)]
        meter_end: u32,
        #[arg(long)]
        security_name: String,
    },
    /// Get one entry by id.
    Get { id: String },
    /// List entries.
    List {
        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Update fields of an entry (fetches, merges, resubmits).
    Update {
        id: String,
        #[arg(long)]
        veh_number: Option<String>,
        #[arg(long)]
        month: Option<String>,
        #[arg(long)]
        week: Option<String>,
        /// Period start (YYYY-MM-DD or DD-MM-YYYY).
        #[arg(long)]
        date_from: Option<String>,
        /// Period end (YYYY-MM-DD or DD-MM-YYYY).
        #[arg(long)]
        date_to: Option<String>,
        #[arg(long)]
        meter_start: Option<u32>,
        #[arg(long)]
        meter_end: Option<u32>,
        #[arg(long)]
        security_name: Option<String>,
    },
    /// Delete an entry by id.
    Delete { id: String },
}
