//! Column command handler

use anyhow::Result;
use colored::*;

use super::ColumnCommands;
use crate::header::{column_label, parse_column};

/// Handle the column command
pub fn handle_column_command(args: ColumnCommands) -> Result<()> {
    for input in &args.columns {
        let index = parse_column(input)?;
        println!("{:>8}  {}", index.to_string().cyan(), column_label(index).yellow());
    }
    Ok(())
}
