//! Implementation of the `innkeep demo` command.
//!
//! Walks through the domain model in sections: creation, validation, the
//! facade, mutation and invoicing.  Every scenario produces a
//! [`DemoRecord`]; an expected rejection is a record, not an error.  A
//! section that fails unexpectedly is reported and the run moves on.

use std::fmt::Display;

use chrono::{Days, NaiveDate};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use innkeep_core::domain::{
    DomainError, Guest, Invoice, Reservation, Room, Service, Validator,
};

use crate::{
    cli::{DemoArgs, DemoSection},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Result of one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The operation succeeded.
    Ok,
    /// The domain refused the operation.
    Rejected,
    /// A query with no pass/fail meaning.
    Info,
}

/// One line of the demonstration.
#[derive(Debug, Clone, Serialize)]
pub struct DemoRecord {
    pub section: String,
    pub scenario: String,
    pub outcome: Outcome,
    pub detail: String,
}

/// Collects records for one section.
struct Section {
    name: DemoSection,
    today: NaiveDate,
    records: Vec<DemoRecord>,
}

impl Section {
    fn new(name: DemoSection, today: NaiveDate) -> Self {
        Self {
            name,
            today,
            records: Vec::new(),
        }
    }

    fn days_from_today(&self, days: i64) -> NaiveDate {
        let shift = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            self.today.checked_add_days(shift)
        } else {
            self.today.checked_sub_days(shift)
        };
        shifted.unwrap_or(self.today)
    }

    fn push(&mut self, scenario: &str, outcome: Outcome, detail: impl Into<String>) {
        self.records.push(DemoRecord {
            section: self.name.to_string(),
            scenario: scenario.to_owned(),
            outcome,
            detail: detail.into(),
        });
    }

    fn info(&mut self, scenario: &str, detail: impl Display) {
        self.push(scenario, Outcome::Info, detail.to_string());
    }

    /// Record `result` and hand the value back on success.
    fn attempt<T: Display>(&mut self, scenario: &str, result: Result<T, DomainError>) -> Option<T> {
        match result {
            Ok(value) => {
                self.push(scenario, Outcome::Ok, value.to_string());
                Some(value)
            }
            Err(err) => {
                self.push(scenario, Outcome::Rejected, err.to_string());
                None
            }
        }
    }

    /// Record a setter call; `state` renders the entity afterwards.
    fn mutate(&mut self, scenario: &str, result: Result<(), DomainError>, state: impl Display) {
        match result {
            Ok(()) => self.push(scenario, Outcome::Ok, state.to_string()),
            Err(err) => self.push(scenario, Outcome::Rejected, err.to_string()),
        }
    }
}

#[instrument(skip_all, fields(sections = args.sections.len()))]
pub fn execute(args: DemoArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let records = run(&args.sections, Validator::today());

    if output.is_json() {
        output.json(&records)?;
        return Ok(());
    }

    output.header(&format!(
        "=== {} · Innkeep {} demonstration ===",
        config.hotel.name,
        innkeep_core::VERSION
    ))?;

    let mut current = None;
    for record in &records {
        if current.as_deref() != Some(record.section.as_str()) {
            output.print("")?;
            output.header(&format!(">>> {}", record.section))?;
            current = Some(record.section.clone());
        }
        match record.outcome {
            Outcome::Ok => {
                output.success(&record.scenario)?;
                output.print(&indent(&record.detail))?;
            }
            Outcome::Rejected => {
                output.rejected(&format!("{}: {}", record.scenario, record.detail))?;
            }
            Outcome::Info => {
                output.info(&format!("{}: {}", record.scenario, record.detail))?;
            }
        }
    }

    let rejected = records
        .iter()
        .filter(|r| r.outcome == Outcome::Rejected)
        .count();
    output.print("")?;
    output.print(&format!(
        "=== END OF DEMONSTRATION ({} scenarios, {rejected} rejected) ===",
        records.len()
    ))?;

    Ok(())
}

/// Run the requested sections (all of them when `selected` is empty).
pub fn run(selected: &[DemoSection], today: NaiveDate) -> Vec<DemoRecord> {
    let mut sections = if selected.is_empty() {
        vec![
            DemoSection::Creation,
            DemoSection::Validation,
            DemoSection::Facade,
            DemoSection::Mutation,
            DemoSection::Invoice,
        ]
    } else {
        selected.to_vec()
    };
    sections.sort();
    sections.dedup();

    let mut records = Vec::new();
    for name in sections {
        debug!(section = %name, "running demo section");
        let mut section = Section::new(name, today);
        let result = match name {
            DemoSection::Creation => creation(&mut section),
            DemoSection::Validation => validation(&mut section),
            DemoSection::Facade => facade(&mut section),
            DemoSection::Mutation => mutation(&mut section),
            DemoSection::Invoice => invoice(&mut section),
        };
        if let Err(err) = result {
            warn!(section = %name, error = %err, "demo section aborted");
            section.push("section aborted", Outcome::Rejected, err.to_string());
        }
        records.append(&mut section.records);
    }
    records
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// ── fixtures ─────────────────────────────────────────────────────────────────

fn john(s: &Section) -> Result<Guest, DomainError> {
    Guest::new("John", "Doe", "john.doe@example.com", s.days_from_today(1))
}

fn single_room() -> Result<Room, DomainError> {
    Room::new(101, "Single", 1, 500.0)
}

// ── sections ─────────────────────────────────────────────────────────────────

fn creation(s: &mut Section) -> Result<(), DomainError> {
    let guest = john(s);
    s.attempt("guest via constructor", guest);

    let alice = Guest::builder()
        .first_name("Alice")
        .last_name("Brown")
        .email("alice.brown@example.com")
        .check_in_date(s.days_from_today(2))
        .build();
    s.attempt("guest via builder", alice);

    s.attempt("room via constructor", single_room());
    let double = Room::builder()
        .room_number(202)
        .room_type("Double")
        .capacity(2)
        .price(750.0)
        .build();
    s.attempt("room via builder", double);

    s.attempt("service via constructor", Service::new("Breakfast", 50));
    Ok(())
}

fn validation(s: &mut Section) -> Result<(), DomainError> {
    let emma = Guest::new(
        "Emma",
        "White",
        "emma.white@example.com",
        s.days_from_today(3),
    );
    s.attempt("valid guest", emma);

    let empty_name = Guest::new("", "Stone", "invalid@example.com", s.days_from_today(1));
    s.attempt("empty first name", empty_name);

    let bad_email = Guest::new("Tom", "Green", "wrong_email", s.days_from_today(1));
    s.attempt("malformed email", bad_email);

    let past = Guest::new("Sara", "Moon", "sara.moon@example.com", s.days_from_today(-2));
    s.attempt("check-in date in the past", past);

    s.attempt("negative room price", Room::new(303, "Suite", 2, -200.0));
    s.attempt("zero room capacity", Room::new(304, "Suite", 0, 900.0));
    s.attempt("negative service price", Service::new("Refund", -5));

    let unfinished = Guest::builder()
        .first_name("Nora")
        .last_name("Field")
        .check_in_date(s.days_from_today(1))
        .build();
    s.attempt("guest without email", unfinished);
    Ok(())
}

fn facade(s: &mut Section) -> Result<(), DomainError> {
    for email in ["example@mail.com", "wrong@@mail"] {
        let valid = Validator::validate_email(Some(email));
        s.info(&format!("email valid? {email}"), valid);
    }
    s.info("string valid? \"   \"", Validator::validate_string(Some("   ")));
    s.info("string valid? (absent)", Validator::validate_string(None));
    s.info("positive? 0", Validator::validate_positive_number(0));
    s.info("non-negative? 0", Validator::validate_non_negative_number(0));

    let today = s.today;
    s.info(
        &format!("check-in date valid? {today}"),
        Validator::validate_check_in_date(Some(today), today),
    );
    let yesterday = s.days_from_today(-1);
    s.info(
        &format!("check-in date valid? {yesterday}"),
        Validator::validate_check_in_date(Some(yesterday), today),
    );
    Ok(())
}

fn mutation(s: &mut Section) -> Result<(), DomainError> {
    let mut guest = john(s)?;
    let mut room = single_room()?;

    let result = guest.set_last_name("Doe-Smith");
    s.mutate("rename guest", result, &guest);

    let result = room.set_price(600.0);
    s.mutate("raise room price", result, &room);

    let result = room.set_price(0.0);
    s.mutate("zero room price", result, &room);

    let result = guest.set_email("wrong@@mail");
    s.mutate("malformed email via setter", result, &guest);
    s.info("email kept", guest.email());
    Ok(())
}

fn invoice(s: &mut Section) -> Result<(), DomainError> {
    let start = s.days_from_today(1);
    let end = s.days_from_today(3);

    let mut reservation = Reservation::new(john(s)?, single_room()?, start, end)?;
    reservation.add_service(Service::new("Breakfast", 50)?);
    reservation.add_service(Service::new("Spa", 30)?);

    let result = reservation.set_end_date(s.days_from_today(0));
    s.mutate("end date before start date", result, reservation.end_date());

    let mut invoice = Invoice::new(reservation, s.today)?;
    s.info("total before calculation", format!("{:.2}", invoice.total_amount()));

    let total = invoice.calculate_total_amount();
    s.info("calculated total", format!("{total:.2}"));

    invoice
        .reservation_mut()
        .add_service(Service::new("Breakfast", 50)?);
    s.info(
        "total after adding a service",
        format!("{:.2} (stale)", invoice.total_amount()),
    );

    invoice.calculate_total_amount();
    s.attempt("recalculated invoice", Ok::<_, DomainError>(&invoice));
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
