use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default indicator code for goods-and-services imports (current US$).
pub const IMPORTS: &str = "NE.IMP.GNFS.CD";
/// Default indicator code for goods-and-services exports (current US$).
pub const EXPORTS: &str = "NE.EXP.GNFS.CD";
/// Default indicator code for GDP (current US$).
pub const GDP: &str = "NY.GDP.MKTP.CD";

/// Metadata section returned by the API (position 0 of the response array).
///
/// Parsed for callers who want paging totals; the flattening pipeline itself
/// never consumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    pub page: u32,
    pub pages: u32,
    /// Some responses encode `per_page` as a string, others as a number.
    /// Accept both and normalize to `u32`.
    #[serde(deserialize_with = "de_u32_from_string_or_number")]
    pub per_page: u32,
    pub total: u32,
}

/// Serde helper: parse `u32` from either a JSON number or a string.
fn de_u32_from_string_or_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct U32Visitor;

    impl<'de> Visitor<'de> for U32Visitor {
        type Value = u32;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a string or integer representing a non-negative number")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v as u32)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if v < 0 {
                return Err(E::custom("negative value for u32"));
            }
            Ok(v as u32)
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            s.parse::<u32>().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(U32Visitor)
}

/// `{id, value}` pair the API uses for the nested `country` and `indicator`
/// objects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CodeName {
    pub id: String,
    pub value: String,
}

/// Serde helper: accept absent/null/malformed `country`/`indicator` fields.
///
/// Anything that is not a well-formed `{id, value}` object deserializes to
/// `None` instead of failing; the derived columns then come out missing.
fn de_lenient_code_name<'de, D>(deserializer: D) -> Result<Option<CodeName>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(v).ok())
}

/// Raw observation record from the API (position 1 array).
///
/// `value` stays a raw JSON value here; numeric coercion (and its error) is
/// owned by the flattening step so that `null` and "not a number" remain
/// distinguishable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default, deserialize_with = "de_lenient_code_name")]
    pub indicator: Option<CodeName>,
    #[serde(default, deserialize_with = "de_lenient_code_name")]
    pub country: Option<CodeName>,
    #[serde(default)]
    pub countryiso3code: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub value: Value,
    pub unit: Option<String>,
    pub obs_status: Option<String>,
    pub decimal: Option<i32>,
}

/// Flattened row (one row = one observation).
///
/// Field order mirrors the flattening: the API's scalar fields pass through
/// first, then the four columns derived from the nested `country` and
/// `indicator` objects, which are dropped. The derived columns are `None`
/// when the source field was absent, null, or not a well-formed object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Observation {
    pub countryiso3code: String,
    pub date: String,
    pub value: Option<f64>,
    pub unit: Option<String>,
    pub obs_status: Option<String>,
    pub decimal: Option<i32>,
    pub country_name: Option<String>,
    pub country_code: Option<String>,
    pub indicator_name: Option<String>,
    pub indicator_code: Option<String>,
}
