//! # Property Search CLI
//!
//! Runs a property search against the configured database and prints the
//! rows as JSON.
//!
//! ## Usage
//! ```bash
//! # Ten cheapest properties in any city containing "van"
//! cargo run -p lightbnb-db --bin lightbnb-search -- --city van
//!
//! # Rated 4+ and under $150/night, show the SQL without connecting
//! cargo run -p lightbnb-db --bin lightbnb-search -- \
//!     --min-rating 4 --max-price 150 --explain
//! ```
//!
//! Connection settings come from `DATABASE_URL` and the `LIGHTBNB_DB_*`
//! variables (see `lightbnb_db::config`). Logs go to stderr; set
//! `RUST_LOG=lightbnb_db=debug` to see each query.

use std::env;

use lightbnb_core::{FilterOptions, Money, DEFAULT_SEARCH_LIMIT};
use lightbnb_db::{Database, DbConfig, PropertySearch};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "LightBnB Property Search

Usage: lightbnb-search [OPTIONS]

Options:
  --city <TEXT>          City contains TEXT
  --owner <ID>           Owned by user ID
  --min-price <DOLLARS>  Nightly cost above DOLLARS
  --max-price <DOLLARS>  Nightly cost below DOLLARS
  --min-rating <N>       Average rating at least N
  --limit <N>            Maximum rows (default: 10)
  --explain              Print the SQL and parameters, do not connect
  -h, --help             Show this help message";

/// Parsed command line.
#[derive(Debug, PartialEq)]
struct SearchArgs {
    options: FilterOptions,
    limit: u32,
    explain: bool,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<SearchArgs, String> {
    let mut parsed = SearchArgs {
        options: FilterOptions::default(),
        limit: DEFAULT_SEARCH_LIMIT,
        explain: false,
        help: false,
    };

    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let mut value = || {
            iter.next()
                .map(String::as_str)
                .ok_or_else(|| format!("{flag} needs a value"))
        };

        match flag.as_str() {
            "--city" => parsed.options.city = Some(value()?.to_string()),
            "--owner" => parsed.options.owner_id = Some(parse_number(flag, value()?)?),
            "--min-price" => {
                parsed.options.minimum_price_per_night = Some(parse_dollars(flag, value()?)?)
            }
            "--max-price" => {
                parsed.options.maximum_price_per_night = Some(parse_dollars(flag, value()?)?)
            }
            "--min-rating" => parsed.options.minimum_rating = Some(parse_number(flag, value()?)?),
            "--limit" => parsed.limit = parse_number(flag, value()?)?,
            "--explain" => parsed.explain = true,
            "--help" | "-h" => parsed.help = true,
            other => return Err(format!("unknown option: {other}")),
        }
    }

    Ok(parsed)
}

fn parse_number<T: std::str::FromStr>(flag: &str, raw: &str) -> Result<T, String> {
    raw.parse()
        .map_err(|_| format!("{flag}: '{raw}' is not a valid number"))
}

fn parse_dollars(flag: &str, raw: &str) -> Result<Money, String> {
    Money::checked_from_dollars(parse_number(flag, raw)?)
        .ok_or_else(|| format!("{flag}: '{raw}' is out of range"))
}

/// Installs the stderr subscriber.
///
/// ## Log Levels
/// - Default: `info,lightbnb=debug,sqlx=warn`
/// - Override with `RUST_LOG`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,lightbnb=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let args = parse_args(&args).map_err(|e| format!("{e}\n\n{USAGE}"))?;

    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    init_tracing();

    if args.explain {
        let query = PropertySearch::new(&args.options).limit(args.limit).build();
        println!("{}", query.sql);
        for (index, param) in query.params.iter().enumerate() {
            println!("  ${} = {}", index + 1, param);
        }
        return Ok(());
    }

    let db = Database::connect(DbConfig::from_env()?).await?;
    let properties = db.properties().search(&args.options, args.limit).await?;
    db.close().await;

    println!("{}", serde_json::to_string_pretty(&properties)?);
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let parsed = parse_args(&[]).unwrap();
        assert!(parsed.options.is_empty());
        assert_eq!(parsed.limit, 10);
        assert!(!parsed.explain);
    }

    #[test]
    fn test_all_flags() {
        let parsed = parse_args(&args(&[
            "--city",
            "van",
            "--owner",
            "3",
            "--min-price",
            "50",
            "--max-price",
            "150",
            "--min-rating",
            "4.5",
            "--limit",
            "20",
            "--explain",
        ]))
        .unwrap();

        assert_eq!(parsed.options.city(), Some("van"));
        assert_eq!(parsed.options.owner_id(), Some(3));
        assert_eq!(
            parsed.options.minimum_price_per_night(),
            Some(Money::from_cents(5_000))
        );
        assert_eq!(
            parsed.options.maximum_price_per_night(),
            Some(Money::from_cents(15_000))
        );
        assert_eq!(parsed.options.minimum_rating(), Some(4.5));
        assert_eq!(parsed.limit, 20);
        assert!(parsed.explain);
    }

    #[test]
    fn test_bad_input() {
        assert!(parse_args(&args(&["--limit", "many"])).is_err());
        assert!(parse_args(&args(&["--city"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());

        let err = parse_args(&args(&["--min-price", "92233720368547759"])).unwrap_err();
        assert_eq!(err, "--min-price: '92233720368547759' is out of range");
        assert!(parse_args(&args(&["--max-price", "-92233720368547759"])).is_err());
    }
}
