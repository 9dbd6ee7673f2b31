//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Which dates the interactive session asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PromptMode {
    /// Employee start and finish dates within the current leave year.
    #[default]
    Employment,
    /// Leave year start date, then the employee's finish date.
    LeaveYear,
}

/// Calculate the annual leave due for part of a leave year.
#[derive(Parser, Debug, Clone)]
#[command(name = "leave-calculator")]
#[command(about = "Calculate prorated annual leave for part of a leave year", long_about = None)]
pub struct Args {
    /// YAML file overriding the statutory allowance, rounding precision and leave year start
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Which dates to prompt for
    #[arg(short, long, value_enum, default_value_t = PromptMode::Employment)]
    pub mode: PromptMode,

    /// Print the full calculation and audit trace as JSON
    #[arg(long)]
    pub json: bool,
}
