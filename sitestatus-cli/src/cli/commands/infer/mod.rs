mod handler;

use std::path::PathBuf;

use clap::Args;

use crate::config::OutputFormat;
use crate::header::Period;

pub use handler::handle_infer_command;

#[derive(Debug, Args)]
pub struct InferCommands {
    /// Spreadsheet files to inspect (each must contain exactly one worksheet)
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Use the past month's status columns
    #[arg(long, conflicts_with = "current_month")]
    pub past_month: bool,

    /// Use the current month's status columns
    #[arg(long)]
    pub current_month: bool,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl InferCommands {
    /// Period selected on the command line, if any
    pub fn period(&self) -> Option<Period> {
        if self.past_month {
            Some(Period::PastMonth)
        } else if self.current_month {
            Some(Period::CurrentMonth)
        } else {
            None
        }
    }
}
