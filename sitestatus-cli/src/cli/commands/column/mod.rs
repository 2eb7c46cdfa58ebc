mod handler;

use clap::Args;

pub use handler::handle_column_command;

#[derive(Debug, Args)]
pub struct ColumnCommands {
    /// Zero-based column indices or column labels (e.g. 5, F, AA)
    #[arg(required = true, value_name = "COLUMN")]
    pub columns: Vec<String>,
}
