//! Implementation of the `innkeep check` command.
//!
//! Runs one facade predicate against a raw value.  A value the rule rejects
//! is a normal outcome (exit 0); only input that cannot be parsed into the
//! rule's type is an error.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, instrument};

use innkeep_core::domain::Validator;

use crate::{
    cli::{CheckArgs, CheckRule},
    error::{CliError, CliResult},
    output::OutputManager,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    rule: String,
    value: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    threshold: Option<NaiveDate>,
    valid: bool,
}

#[instrument(skip_all, fields(rule = %args.rule))]
pub fn execute(args: CheckArgs, output: OutputManager) -> CliResult<()> {
    let threshold = match args.rule {
        CheckRule::Date => Some(match args.threshold.as_deref() {
            Some(raw) => parse_date("threshold", raw)?,
            None => Validator::today(),
        }),
        _ => None,
    };

    let valid = evaluate(args.rule, &args.value, threshold)?;
    debug!(valid, "rule evaluated");

    if output.is_json() {
        output.json(&CheckReport {
            rule: args.rule.to_string(),
            value: &args.value,
            threshold,
            valid,
        })?;
        return Ok(());
    }

    let subject = match threshold {
        Some(date) => format!("{} '{}' (threshold {date})", args.rule, args.value),
        None => format!("{} '{}'", args.rule, args.value),
    };
    if valid {
        output.success(&format!("valid: {subject}"))?;
    } else {
        output.rejected(&format!("invalid: {subject}"))?;
    }

    Ok(())
}

fn evaluate(rule: CheckRule, value: &str, threshold: Option<NaiveDate>) -> CliResult<bool> {
    Ok(match rule {
        CheckRule::String => Validator::validate_string(Some(value)),
        CheckRule::Email => Validator::validate_email(Some(value)),
        CheckRule::Date => {
            let date = parse_date("value", value)?;
            Validator::validate_date(Some(date), threshold.unwrap_or_else(Validator::today))
        }
        CheckRule::Positive => Validator::validate_positive_number(parse_number(value)?),
        CheckRule::NonNegative => Validator::validate_non_negative_number(parse_number(value)?),
    })
}

fn parse_date(what: &str, raw: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|e| CliError::InvalidInput {
        message: format!("{what} '{raw}' is not a YYYY-MM-DD date"),
        source: Some(Box::new(e)),
    })
}

fn parse_number(raw: &str) -> CliResult<f64> {
    raw.trim().parse::<f64>().map_err(|e| CliError::InvalidInput {
        message: format!("'{raw}' is not a number"),
        source: Some(Box::new(e)),
    })
}
