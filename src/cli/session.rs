//! The interactive calculation session.
//!
//! Asks for the allowance and two dates, builds the leave year and
//! employment period they describe, and prorates the allowance.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use tracing::debug;

use crate::calculation::calculate_proration;
use crate::config::CalculatorConfig;
use crate::error::{LeaveError, LeaveResult};
use crate::input::{Prompter, parse_allowance, parse_date};
use crate::models::{EmploymentPeriod, LeaveAllowance, LeaveYear, ProrationResult};

use super::args::PromptMode;

const ALLOWANCE_PROMPT: &str = "How many days annual leave for the full year?";
const START_DATE_PROMPT: &str = "Employee start date in YYYY-MM-DD format";
const FINISH_DATE_PROMPT: &str = "Employee finish date in YYYY-MM-DD format";
const LEAVE_YEAR_START_PROMPT: &str = "Leave year start date in YYYY-MM-DD format";

/// The resolved answers of one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionInputs {
    /// Full-year allowance.
    pub allowance: LeaveAllowance,
    /// The leave year the allowance accrues over.
    pub leave_year: LeaveYear,
    /// The part of the leave year the employee is present.
    pub employment: EmploymentPeriod,
}

/// Asks the questions for `mode` and resolves the answers.
///
/// `today` picks the default leave year: the configured leave year that
/// contains it.
pub fn collect_inputs<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &CalculatorConfig,
    mode: PromptMode,
    today: NaiveDate,
) -> LeaveResult<SessionInputs> {
    let allowance = prompter.ask(
        ALLOWANCE_PROMPT,
        "allowance",
        config.default_allowance()?,
        parse_allowance,
    )?;
    let current = config.current_leave_year(today)?;

    match mode {
        PromptMode::Employment => {
            let start = prompter.ask(START_DATE_PROMPT, "start date", current.start(), parse_date)?;
            let end = prompter.ask(FINISH_DATE_PROMPT, "finish date", current.end(), parse_date)?;
            Ok(SessionInputs {
                allowance,
                leave_year: current,
                employment: EmploymentPeriod { start, end },
            })
        }
        PromptMode::LeaveYear => {
            let start = prompter.ask(
                LEAVE_YEAR_START_PROMPT,
                "leave year start date",
                current.start(),
                parse_date,
            )?;
            let leave_year = LeaveYear::starting_on(start)?;
            let end = prompter.ask(FINISH_DATE_PROMPT, "finish date", leave_year.end(), parse_date)?;
            Ok(SessionInputs {
                allowance,
                leave_year,
                employment: EmploymentPeriod { start, end },
            })
        }
    }
}

/// Runs a full session: prompts, then prorates with the configured
/// precision.
pub fn run_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &CalculatorConfig,
    mode: PromptMode,
    today: NaiveDate,
) -> LeaveResult<ProrationResult> {
    let inputs = collect_inputs(prompter, config, mode, today)?;
    debug!(
        ?mode,
        allowance = %inputs.allowance,
        leave_year_start = %inputs.leave_year.start(),
        employment_start = %inputs.employment.start,
        employment_end = %inputs.employment.end,
        "Session inputs resolved"
    );
    calculate_proration(
        &inputs.allowance,
        &inputs.leave_year,
        &inputs.employment,
        config.rounding_precision,
    )
}

/// Renders a result for standard output: the single summary line, or
/// pretty JSON with the audit trace.
pub fn render(result: &ProrationResult, json: bool) -> LeaveResult<String> {
    if json {
        return serde_json::to_string_pretty(result).map_err(|e| LeaveError::CalculationError {
            message: format!("failed to serialize result: {}", e),
        });
    }
    Ok(result.to_string())
}

/// Writes the outcome of a session and returns the process exit status.
///
/// A result goes to `out` as one rendered line. An interrupt prints a bare
/// newline to `out` and exits 0. Any other error is written once to `err`
/// as `Error: <message>` and exits with [`LeaveError::exit_code`].
pub fn report_outcome<O: Write, E: Write>(
    outcome: LeaveResult<ProrationResult>,
    json: bool,
    out: &mut O,
    err: &mut E,
) -> i32 {
    let written = outcome.and_then(|result| -> LeaveResult<()> {
        writeln!(out, "{}", render(&result, json)?)?;
        Ok(())
    });

    match written {
        Ok(()) => 0,
        Err(LeaveError::Interrupted) => {
            // Leave the shell prompt on a fresh line.
            let _ = writeln!(out);
            0
        }
        Err(error) => {
            debug!(error = %error, "Leave calculation failed");
            let _ = writeln!(err, "Error: {}", error);
            error.exit_code()
        }
    }
}
