use clap::Subcommand;

/// Vehicle maintenance request commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MaintenanceRequestCommands {
    /// Create a maintenance request.
    Create {
        #[arg(long)]
        veh_number: String,
        #[arg(long)]
        filled_by: String,
        /// Report date (YYYY-MM-DD or DD-MM-YYYY).
        #[arg(long)]
        report_date: String,
        #[arg(long)]
        description_of_problem: String,
        #[arg(long)]
        mechanic_notes: String,
        /// Completion date (YYYY-MM-DD or DD-MM-YYYY).
        #[arg(long)]
        completed_date: String,
        #[arg(long)]
        mechanic_name: String,
    },
    /// Get one request by id.
    Get { id: String },
    /// List requests.
    List {
        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Update fields of a request (fetches, merges, resubmits).
    Update {
        id: String,
        #[arg(long)]
        veh_number: Option<String>,
        #[arg(long)]
        filled_by: Option<String>,
        /// Report date (YYYY-MM-DD or DD-MM-YYYY).
        #[arg(long)]
        report_date: Option<String>,
        #[arg(long)]
        description_of_problem: Option<String>,
        #[arg(long)]
        mechanic_notes: Option<String>,
        /// Completion date (YYYY-MM-DD or DD-MM-YYYY).
        #[arg(long)]
        completed_date: Option<String>,
        #[arg(long)]
        mechanic_name: Option<String>,
    },
    /// Delete a request by id.
    Delete { id: String },
}
