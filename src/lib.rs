//! wbflat
//!
//! A lightweight Rust library for retrieving World Bank economic indicator
//! series (imports, exports, GDP, or any indicator code) and flattening the
//! API's nested JSON into tidy, analysis-friendly rows. Pairs with the
//! `wbflat` CLI.
//!
//! ### Features
//! - Fetch one indicator for a country and an inclusive year range
//! - Flatten nested `country`/`indicator` objects into scalar columns
//! - Preset entry points for imports, exports, and GDP
//!
//! One call performs one blocking GET (`per_page=1000`, first page only) and
//! every failure (transport, HTTP status, API error payload, JSON parse,
//! numeric coercion) propagates to the caller untouched.
//!
//! ### Example
//! ```no_run
//! let rows = wbflat::fetch_gdp("FR", "2021", "2022", None)?;
//! for row in &rows {
//!     println!("{}: {:?}", row.date, row.value);
//! }
//! # Ok::<(), wbflat::Error>(())
//! ```

pub mod api;
pub mod error;
pub mod flatten;
pub mod models;

pub use api::Client;
pub use error::{Error, Result};
pub use flatten::flatten;
pub use models::{CodeName, Entry, Meta, Observation};

/// Fetch and flatten one indicator series with a default client.
pub fn fetch_indicator(
    country: &str,
    start_date: &str,
    end_date: &str,
    indicator_code: &str,
) -> Result<Vec<Observation>> {
    Client::default().fetch_indicator(country, start_date, end_date, indicator_code)
}

/// Imports of goods and services (`NE.IMP.GNFS.CD` unless overridden).
pub fn fetch_imports(
    country: &str,
    start_date: &str,
    end_date: &str,
    indicator_code: Option<&str>,
) -> Result<Vec<Observation>> {
    Client::default().fetch_imports(country, start_date, end_date, indicator_code)
}

/// Exports of goods and services (`NE.EXP.GNFS.CD` unless overridden).
pub fn fetch_exports(
    country: &str,
    start_date: &str,
    end_date: &str,
    indicator_code: Option<&str>,
) -> Result<Vec<Observation>> {
    Client::default().fetch_exports(country, start_date, end_date, indicator_code)
}

/// GDP in current US$ (`NY.GDP.MKTP.CD` unless overridden).
pub fn fetch_gdp(
    country: &str,
    start_date: &str,
    end_date: &str,
    indicator_code: Option<&str>,
) -> Result<Vec<Observation>> {
    Client::default().fetch_gdp(country, start_date, end_date, indicator_code)
}
