//! Implementation of the `innkeep quote` command.

use chrono::{Days, NaiveDate};
use serde::Serialize;
use tracing::{debug, info, instrument};

use innkeep_core::domain::{Guest, Invoice, Reservation, Room, Service, Validator};

use crate::{
    cli::QuoteArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct QuoteReport<'a> {
    hotel: &'a str,
    currency: &'a str,
    nights: i64,
    invoice: &'a Invoice,
}

#[instrument(skip_all, fields(room = args.room_number, nights = args.nights))]
pub fn execute(args: QuoteArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let today = Validator::today();
    let invoice = build_invoice(&args, &config, today)?;

    info!(total = invoice.total_amount(), "quote computed");

    if output.is_json() {
        output.json(&QuoteReport {
            hotel: &config.hotel.name,
            currency: &config.hotel.currency,
            nights: invoice.reservation().nights(),
            invoice: &invoice,
        })?;
        return Ok(());
    }

    output.header(&format!("{}: quote", config.hotel.name))?;
    output.print(&invoice.to_string())?;
    if invoice.reservation().services().is_empty() {
        output.info("No extra services requested")?;
    }
    output.success(&format!(
        "Total: {:.2} {}",
        invoice.total_amount(),
        config.hotel.currency
    ))?;

    Ok(())
}

/// Build the reservation for the configured placeholder guest and price it.
fn build_invoice(args: &QuoteArgs, config: &AppConfig, today: NaiveDate) -> CliResult<Invoice> {
    let start = offset(today, args.start_in)?;
    let end = offset(start, args.nights)?;

    let guest = Guest::new(
        config.guest.first_name.as_str(),
        config.guest.last_name.as_str(),
        config.guest.email.as_str(),
        start,
    )?;

    let room = Room::builder()
        .room_number(args.room_number)
        .room_type(args.room_type.as_str())
        .capacity(args.capacity)
        .price(args.price)
        .build()?;

    let services = args
        .services
        .iter()
        .map(|(name, price)| Service::new(name.as_str(), *price))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(count = services.len(), "services accepted");

    let reservation = Reservation::builder()
        .guest(guest)
        .room(room)
        .services(services)
        .start_date(start)
        .end_date(end)
        .build()?;

    let mut invoice = Invoice::new(reservation, today)?;
    invoice.calculate_total_amount();
    Ok(invoice)
}

fn offset(date: NaiveDate, days: u64) -> CliResult<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| CliError::InvalidInput {
            message: format!("{days} days from {date} is out of the supported date range"),
            source: None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use innkeep_core::domain::DomainError;

    fn args(price: f64, services: &[(&str, i32)]) -> QuoteArgs {
        QuoteArgs {
            room_number: 101,
            room_type: "Single".into(),
            capacity: 1,
            price,
            services: services
                .iter()
                .map(|(n, p)| ((*n).to_owned(), *p))
                .collect(),
            nights: 1,
            start_in: 0,
        }
    }

    #[test]
    fn total_includes_room_and_services() {
        let today = Validator::today();
        let invoice = build_invoice(
            &args(500.0, &[("Breakfast", 50), ("Spa", 30)]),
            &AppConfig::default(),
            today,
        )
        .unwrap();
        assert_eq!(invoice.total_amount(), 580.0);
        assert_eq!(invoice.issue_date(), today);
        assert_eq!(invoice.reservation().nights(), 1);
    }

    #[test]
    fn duplicate_services_are_charged_twice() {
        let invoice = build_invoice(
            &args(500.0, &[("Breakfast", 50), ("Breakfast", 50)]),
            &AppConfig::default(),
            Validator::today(),
        )
        .unwrap();
        assert_eq!(invoice.total_amount(), 600.0);
    }

    #[test]
    fn negative_price_is_rejected_by_domain() {
        let err = build_invoice(&args(-200.0, &[]), &AppConfig::default(), Validator::today())
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Domain(DomainError::InvalidValue { field: "price", .. })
        ));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn negative_service_price_is_rejected() {
        let err = build_invoice(
            &args(500.0, &[("Refund", -5)]),
            &AppConfig::default(),
            Validator::today(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("can't be negative"));
    }

    #[test]
    fn invalid_configured_guest_is_reported() {
        let mut config = AppConfig::default();
        config.guest.email = "not-an-email".into();
        let err = build_invoice(&args(500.0, &[]), &config, Validator::today()).unwrap_err();
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn zero_nights_is_a_same_day_stay() {
        let mut a = args(500.0, &[]);
        a.nights = 0;
        let invoice = build_invoice(&a, &AppConfig::default(), Validator::today()).unwrap();
        assert_eq!(invoice.reservation().nights(), 0);
        assert_eq!(invoice.total_amount(), 500.0);
    }
}
