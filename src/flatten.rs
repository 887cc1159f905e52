//! Flattening of the raw World Bank response into tidy `Observation` rows.
//!
//! The API returns `[Meta, [Entry, ...]]`. Only the entry array matters here:
//! each record becomes one row, the nested `country`/`indicator` objects are
//! decomposed into four scalar columns, and everything else passes through.

use crate::error::{Error, Result};
use crate::models::{CodeName, Entry, Observation};
use serde_json::Value;

/// Flatten a raw response document into one `Observation` per record.
///
/// Element 0 (paging metadata) is ignored. A one-element document (metadata
/// only, no entry array) yields zero rows. An empty entry array also yields
/// zero rows; neither is an error.
///
/// ### Errors
/// - [`Error::Shape`] if the document is not a non-empty top-level array.
/// - [`Error::Api`] if element 0 carries the API's `message` error payload.
/// - [`Error::Parse`] if the entry array does not match the record layout.
/// - [`Error::Coercion`] if a record's `value` is present but not numeric.
pub fn flatten(doc: &Value) -> Result<Vec<Observation>> {
    let arr = doc
        .as_array()
        .ok_or(Error::Shape("not a top-level array"))?;
    if arr.is_empty() {
        return Err(Error::Shape("empty array"));
    }

    // On bad codes the API answers 200 with `[{"message": [...]}]`.
    if arr[0].get("message").is_some() {
        return Err(Error::Api(arr[0].to_string()));
    }

    let entries: Vec<Entry> = if arr.len() > 1 {
        serde_json::from_value(arr[1].clone())?
    } else {
        vec![]
    };

    entries.into_iter().map(flatten_entry).collect()
}

/// Flatten a single record: coerce `value`, lift `country`/`indicator` into
/// scalar columns, drop the nested objects.
pub fn flatten_entry(e: Entry) -> Result<Observation> {
    let value = coerce_value(&e.value)?;
    let (country_name, country_code) = split_code_name(e.country);
    let (indicator_name, indicator_code) = split_code_name(e.indicator);
    Ok(Observation {
        countryiso3code: e.countryiso3code,
        date: e.date,
        value,
        unit: e.unit,
        obs_status: e.obs_status,
        decimal: e.decimal,
        country_name,
        country_code,
        indicator_name,
        indicator_code,
    })
}

/// `(name, code)` from a nested object, `(None, None)` when it was missing
/// or malformed.
fn split_code_name(cn: Option<CodeName>) -> (Option<String>, Option<String>) {
    match cn {
        Some(cn) => (Some(cn.value), Some(cn.id)),
        None => (None, None),
    }
}

/// Numeric coercion for the `value` field.
///
/// Null stays missing (never zero, never an error). Numbers pass through as
/// `f64`; numeric strings parse (the API occasionally stringifies numbers).
/// Anything else is a coercion error, surfaced to the caller.
fn coerce_value(v: &Value) -> Result<Option<f64>> {
    match v {
        Value::Null => Ok(None),
        Value::Number(n) => match n.as_f64() {
            Some(f) => Ok(Some(f)),
            None => Err(Error::Coercion { raw: n.to_string() }),
        },
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(f) => Ok(Some(f)),
            Err(_) => Err(Error::Coercion { raw: s.clone() }),
        },
        other => Err(Error::Coercion {
            raw: other.to_string(),
        }),
    }
}
