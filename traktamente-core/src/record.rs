//! Allowance record type

use serde::de::{self, DeserializeOwned};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};
use std::fmt;

/// External key of the country/territory field
pub const COUNTRY_KEY: &str = "country or territory";
const CODE_KEY: &str = "code";
const YEAR_KEY: &str = "year";

/// Year label of a record
///
/// The dataset writes years as strings, but numeric years are accepted and
/// written back unchanged. Only string labels ever match a year filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    /// Textual label, e.g. `"2024"`
    Text(String),
    /// Numeric label, e.g. `2024`
    Number(Number),
}

impl Year {
    /// Strict equality against a query value
    pub fn matches(&self, query: &str) -> bool {
        match self {
            Year::Text(label) => label == query,
            Year::Number(_) => false,
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Text(label) => f.write_str(label),
            Year::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Allowance rate for one country or territory in one year
///
/// Serializes back with the keys in the order they were read. Keys added
/// later follow the original ones. Absent or `null` typed fields are left out.
#[derive(Debug, Clone, PartialEq)]
pub struct AllowanceRecord {
    /// Display name, e.g. "Franska Polynesien"
    pub country_or_territory: Option<String>,

    /// Short identifier, e.g. "PF"
    pub code: Option<String>,

    /// Year the rate applies to
    pub year: Option<Year>,

    /// Amount and any other attributes, passed through untouched
    pub extra: Map<String, Value>,

    key_order: Vec<String>,
}

impl AllowanceRecord {
    /// Create a record with a name, code and string year
    pub fn new(
        country_or_territory: impl Into<String>,
        code: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        AllowanceRecord {
            country_or_territory: Some(country_or_territory.into()),
            code: Some(code.into()),
            year: Some(Year::Text(year.into())),
            extra: Map::new(),
            key_order: vec![
                COUNTRY_KEY.to_string(),
                CODE_KEY.to_string(),
                YEAR_KEY.to_string(),
            ],
        }
    }

    /// Add a pass-through attribute
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if !self.key_order.contains(&key) {
            self.key_order.push(key.clone());
        }
        self.extra.insert(key, value.into());
        self
    }

    /// Value of `key` in output form, if present
    fn entry(&self, key: &str) -> Option<Value> {
        match key {
            COUNTRY_KEY => self.country_or_territory.clone().map(Value::String),
            CODE_KEY => self.code.clone().map(Value::String),
            YEAR_KEY => self.year.as_ref().map(|year| match year {
                Year::Text(label) => Value::String(label.clone()),
                Year::Number(n) => Value::Number(n.clone()),
            }),
            other => self.extra.get(other).cloned(),
        }
    }

    /// Whether the name contains `needle`, where `needle` is already lowercased
    pub fn country_contains(&self, needle: &str) -> bool {
        self.country_or_territory
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(needle))
    }

    /// Whether the whole name equals `name`, where `name` is already lowercased
    pub fn country_equals(&self, name: &str) -> bool {
        self.country_or_territory
            .as_deref()
            .is_some_and(|own| own.to_lowercase() == name)
    }

    /// Whether the code equals `code`, where `code` is already lowercased
    pub fn code_equals(&self, code: &str) -> bool {
        self.code
            .as_deref()
            .is_some_and(|own| own.to_lowercase() == code)
    }

    /// Whether the year label equals `year` exactly
    pub fn year_equals(&self, year: &str) -> bool {
        self.year.as_ref().is_some_and(|own| own.matches(year))
    }
}

impl Serialize for AllowanceRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let typed = [COUNTRY_KEY, CODE_KEY, YEAR_KEY];
        let late_keys = typed
            .into_iter()
            .chain(self.extra.keys().map(String::as_str))
            .filter(|key| !self.key_order.iter().any(|k| k == key));

        let mut map = serializer.serialize_map(None)?;
        for key in self.key_order.iter().map(String::as_str).chain(late_keys) {
            if let Some(value) = self.entry(key) {
                map.serialize_entry(key, &value)?;
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AllowanceRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut extra = Map::deserialize(deserializer)?;
        let key_order = extra.keys().cloned().collect();
        Ok(AllowanceRecord {
            country_or_territory: take_field::<_, D::Error>(&mut extra, COUNTRY_KEY)?,
            code: take_field::<_, D::Error>(&mut extra, CODE_KEY)?,
            year: take_field::<_, D::Error>(&mut extra, YEAR_KEY)?,
            extra,
            key_order,
        })
    }
}

fn take_field<T, E>(fields: &mut Map<String, Value>, key: &str) -> Result<Option<T>, E>
where
    T: DeserializeOwned,
    E: de::Error,
{
    match fields.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| E::custom(format_args!("field `{}`: {}", key, e))),
    }
}
