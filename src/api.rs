//! Synchronous client for the **World Bank Indicators API (v2)**.
//!
//! This module covers the `country/{code}/indicator/{code}` endpoint and
//! returns results as tidy [`Observation`] rows via the flattening step.
//!
//! ### Notes
//! - One call performs exactly one blocking GET with `per_page=1000`; there is
//!   no retry and no pagination loop. If `Meta.pages > 1` the remaining pages
//!   are simply not fetched; callers needing them can inspect the document
//!   from [`Client::fetch_raw`].
//! - No request timeout is applied by default; use [`Client::with_timeout`]
//!   to opt in to one.
//!
//! Typical usage:
//! ```no_run
//! # use wbflat::Client;
//! let client = Client::default();
//! let rows = client.fetch_gdp("FR", "2021", "2022", None)?;
//! # Ok::<(), wbflat::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::flatten::flatten;
use crate::models::{self, Observation};
use log::debug;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::time::Duration;

/// Blocking World Bank API client.
///
/// `base_url` is public so tests (or mirrors) can point the client at a
/// different host.
#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::build(None)
    }
}

// Allow -, _, . unescaped in codes (common for indicator ids)
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc(code: &str) -> String {
    percent_encoding::utf8_percent_encode(code.trim(), SAFE).to_string()
}

impl Client {
    /// Client with an explicit total request timeout (plus a 10s connect
    /// timeout). The default client sets none.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::build(Some(timeout))
    }

    fn build(timeout: Option<Duration>) -> Self {
        let mut builder = HttpClient::builder()
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("wbflat/", env!("CARGO_PKG_VERSION")));
        if let Some(t) = timeout {
            builder = builder
                .timeout(t)
                .connect_timeout(Duration::from_secs(10));
        }
        let http = builder.build().expect("reqwest client build");
        Self {
            base_url: "https://api.worldbank.org/v2".into(),
            http,
        }
    }

    fn request_url(&self, country: &str, start: &str, end: &str, indicator: &str) -> String {
        format!(
            "{}/country/{}/indicator/{}?format=json&date={}:{}&per_page=1000",
            self.base_url,
            enc(country),
            enc(indicator),
            enc(start),
            enc(end),
        )
    }

    /// Fetch the raw response document for one country/date-range/indicator
    /// triple.
    ///
    /// Inputs are unvalidated; malformed codes go to the API verbatim (URL
    /// encoding aside) and come back as an HTTP or API error. The returned
    /// document is the API's two-element `[Meta, [Entry, ...]]` array.
    ///
    /// ### Errors
    /// - [`Error::Transport`] on network-level failure
    /// - [`Error::Http`] on a non-2xx status
    /// - [`Error::Parse`] when the body is not valid JSON
    /// - [`Error::Api`] when the body carries the API's error payload
    pub fn fetch_raw(
        &self,
        country: &str,
        start_date: &str,
        end_date: &str,
        indicator_code: &str,
    ) -> Result<Value> {
        let url = self.request_url(country, start_date, end_date, indicator_code);
        debug!("GET {url}");

        let resp = self.http.get(&url).send().map_err(Error::Transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Http { status });
        }
        let body = resp.text().map_err(Error::Transport)?;
        let doc: Value = serde_json::from_str(&body)?;

        // The API reports bad parameters as 200 + `[{"message": ...}]`.
        if let Some(first) = doc.as_array().and_then(|a| a.first()) {
            if first.get("message").is_some() {
                return Err(Error::Api(first.to_string()));
            }
        }
        Ok(doc)
    }

    /// Fetch and flatten one indicator series: one row per observation, in
    /// response order, at most 1000 rows per call.
    pub fn fetch_indicator(
        &self,
        country: &str,
        start_date: &str,
        end_date: &str,
        indicator_code: &str,
    ) -> Result<Vec<Observation>> {
        let doc = self.fetch_raw(country, start_date, end_date, indicator_code)?;
        flatten(&doc)
    }

    /// Goods-and-services imports; defaults to [`models::IMPORTS`]
    /// (`NE.IMP.GNFS.CD`) unless an override is given.
    pub fn fetch_imports(
        &self,
        country: &str,
        start_date: &str,
        end_date: &str,
        indicator_code: Option<&str>,
    ) -> Result<Vec<Observation>> {
        self.fetch_indicator(
            country,
            start_date,
            end_date,
            indicator_code.unwrap_or(models::IMPORTS),
        )
    }

    /// Goods-and-services exports; defaults to [`models::EXPORTS`]
    /// (`NE.EXP.GNFS.CD`) unless an override is given.
    pub fn fetch_exports(
        &self,
        country: &str,
        start_date: &str,
        end_date: &str,
        indicator_code: Option<&str>,
    ) -> Result<Vec<Observation>> {
        self.fetch_indicator(
            country,
            start_date,
            end_date,
            indicator_code.unwrap_or(models::EXPORTS),
        )
    }

    /// GDP in current US$; defaults to [`models::GDP`] (`NY.GDP.MKTP.CD`)
    /// unless an override is given.
    pub fn fetch_gdp(
        &self,
        country: &str,
        start_date: &str,
        end_date: &str,
        indicator_code: Option<&str>,
    ) -> Result<Vec<Observation>> {
        self.fetch_indicator(
            country,
            start_date,
            end_date,
            indicator_code.unwrap_or(models::GDP),
        )
    }
}
