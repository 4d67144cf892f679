//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "innkeep",
    bin_name = "innkeep",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f3e8} Validated hotel domain model",
    long_about = "Innkeep demonstrates a small hotel domain model: guests, rooms, \
                  services, reservations and invoices, each validated on every write.",
    after_help = "EXAMPLES:\n\
        \x20 innkeep demo\n\
        \x20 innkeep check email john.doe@example.com\n\
        \x20 innkeep quote --room-number 101 --room-type Single --capacity 1 --price 500 \\\n\
        \x20     --service Breakfast=50 --service Spa=30\n\
        \x20 innkeep completions bash > /usr/share/bash-completion/completions/innkeep",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the demonstration scenarios.
    #[command(
        about = "Run the demonstration scenarios",
        after_help = "EXAMPLES:\n\
            \x20 innkeep demo\n\
            \x20 innkeep demo --section validation --section invoice\n\
            \x20 innkeep --output-format json demo"
    )]
    Demo(DemoArgs),

    /// Run a single validation rule against a value.
    #[command(
        about = "Check a value against a validation rule",
        after_help = "EXAMPLES:\n\
            \x20 innkeep check email example@mail.com\n\
            \x20 innkeep check date 2030-01-01 --threshold 2029-12-31\n\
            \x20 innkeep check positive -- -200"
    )]
    Check(CheckArgs),

    /// Price a stay: build a reservation and print its invoice.
    #[command(
        visible_alias = "q",
        about = "Build a reservation and print its invoice",
        after_help = "EXAMPLES:\n\
            \x20 innkeep quote --room-number 101 --room-type Single --capacity 1 --price 500\n\
            \x20 innkeep quote --room-number 7 --room-type Suite --capacity 4 --price 1200 \\\n\
            \x20     --service Breakfast=50 --nights 3 --start-in 2"
    )]
    Quote(QuoteArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 innkeep completions bash > ~/.local/share/bash-completion/completions/innkeep\n\
            \x20 innkeep completions zsh  > ~/.zfunc/_innkeep\n\
            \x20 innkeep completions fish > ~/.config/fish/completions/innkeep.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Innkeep configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 innkeep config get hotel.name\n\
            \x20 innkeep config list\n\
            \x20 innkeep config path"
    )]
    Config(ConfigCommands),
}

// ── demo ──────────────────────────────────────────────────────────────────────

/// Arguments for `innkeep demo`.
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Only run these sections (default: all, in order).
    #[arg(
        short = 's',
        long = "section",
        value_name = "SECTION",
        value_enum,
        help = "Run only the given section (repeatable)"
    )]
    pub sections: Vec<DemoSection>,
}

/// Demonstration sections, run in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum DemoSection {
    /// Creating entities through constructors and builders.
    Creation,
    /// Successful and failed validation.
    Validation,
    /// The stateless validation facade.
    Facade,
    /// Changing fields through validating setters.
    Mutation,
    /// Reservation services and invoice totals.
    Invoice,
}

impl std::fmt::Display for DemoSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Creation => write!(f, "creation"),
            Self::Validation => write!(f, "validation"),
            Self::Facade => write!(f, "facade"),
            Self::Mutation => write!(f, "mutation"),
            Self::Invoice => write!(f, "invoice"),
        }
    }
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `innkeep check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Rule to apply.
    #[arg(value_enum, help = "Validation rule")]
    pub rule: CheckRule,

    /// Value to check.
    #[arg(value_name = "VALUE", allow_hyphen_values = true, help = "Value to check")]
    pub value: String,

    /// Threshold for `date` (default: today).
    #[arg(
        long = "threshold",
        value_name = "YYYY-MM-DD",
        help = "Earliest accepted date for the date rule"
    )]
    pub threshold: Option<String>,
}

/// Rules exposed by the validation facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckRule {
    /// Non-empty after trimming.
    #[value(alias = "text")]
    String,
    /// Basic `local@domain.tld` shape.
    Email,
    /// On or after the threshold date.
    Date,
    /// Strictly greater than zero.
    Positive,
    /// Zero or greater.
    #[value(name = "non-negative")]
    NonNegative,
}

impl std::fmt::Display for CheckRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Email => write!(f, "email"),
            Self::Date => write!(f, "date"),
            Self::Positive => write!(f, "positive"),
            Self::NonNegative => write!(f, "non-negative"),
        }
    }
}

// ── quote ─────────────────────────────────────────────────────────────────────

/// Arguments for `innkeep quote`.
#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Room number.
    #[arg(long = "room-number", value_name = "N", allow_hyphen_values = true)]
    pub room_number: i32,

    /// Room type, e.g. Single or Suite.
    #[arg(long = "room-type", value_name = "TYPE")]
    pub room_type: String,

    /// Maximum number of people in the room.
    #[arg(long = "capacity", value_name = "N", allow_hyphen_values = true)]
    pub capacity: i32,

    /// Room price.
    #[arg(long = "price", value_name = "AMOUNT", allow_hyphen_values = true)]
    pub price: f64,

    /// Extra service as `NAME=PRICE` (repeatable; duplicates are kept).
    #[arg(
        long = "service",
        value_name = "NAME=PRICE",
        value_parser = parse_service,
        allow_hyphen_values = true,
        help = "Add a service, e.g. Breakfast=50"
    )]
    pub services: Vec<(String, i32)>,

    /// Length of stay.
    #[arg(long = "nights", value_name = "N", default_value_t = 1)]
    pub nights: u64,

    /// Days from today until check-in.
    #[arg(long = "start-in", value_name = "DAYS", default_value_t = 0)]
    pub start_in: u64,
}

/// Parse `NAME=PRICE`. The price is validated later by the domain.
fn parse_service(raw: &str) -> Result<(String, i32), String> {
    let (name, price) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=PRICE, got '{raw}'"))?;
    let price = price
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid price '{price}': {e}"))?;
    Ok((name.to_owned(), price))
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `innkeep completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `innkeep config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `hotel.name`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
