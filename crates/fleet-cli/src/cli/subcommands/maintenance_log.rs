use clap::Subcommand;

/// Vehicle maintenance log commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MaintenanceLogCommands {
    /// Create a maintenance log entry.
    Create {
        #[arg(long)]
        make: String,
        #[arg(long)]
        model: String,
        #[arg(long)]
        year: u32,
        #[arg(long)]
        veh_id_number: String,
        #[arg(long)]
        engine: String,
        /// Service date (YYYY-MM-DD or DD-MM-YYYY).
        #[arg(long)]
        date_of_service: String,
        #[arg(long)]
        mileage_of_service: u32,
        #[arg(long)]
        performed_by_name: String,
        /// Work performed per the service schedule.
        #[arg(long)]
        work_performed: String,
        #[arg(long)]
        cost: f64,
        #[arg(long)]
        invoice: String,
        #[arg(long)]
        notes: String,
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
        make: Option<String>,
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        year: Option<u32>,
        #[arg(long)]
        veh_id_number: Option<String>,
        #[arg(long)]
        engine: Option<String>,
        /// Service date (YYYY-MM-DD or DD-MM-YYYY).
        #[arg(long)]
        date_of_service: Option<String>,
        #[arg(long)]
        mileage_of_service: Option<u32>,
        #[arg(long)]
        performed_by_name: Option<String>,
        /// Work performed per the service schedule.
        #[arg(long)]
        work_performed: Option<String>,
        #[arg(long)]
        cost: Option<f64>,
        #[arg(long)]
        invoice: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete an entry by id.
    Delete { id: String },
}
