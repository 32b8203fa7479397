//! Read-only allowance directory and its lookups

use crate::error::LookupError;
use crate::query::{normalize_country_slug, ListQuery};
use crate::record::{AllowanceRecord, Year};
use std::sync::Arc;
use tracing::{instrument, trace};

/// Immutable collection of allowance records
///
/// Cloning is cheap and shares the records. Every lookup scans the records in
/// their original order, so when several records match a single-record
/// lookup the first one wins.
#[derive(Debug, Clone)]
pub struct AllowanceDirectory {
    records: Arc<[AllowanceRecord]>,
}

impl AllowanceDirectory {
    /// Create a directory from records in collection order
    pub fn new(records: Vec<AllowanceRecord>) -> Self {
        AllowanceDirectory {
            records: Arc::from(records.into_boxed_slice()),
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in collection order
    pub fn records(&self) -> &[AllowanceRecord] {
        &self.records
    }

    /// Distinct year labels in first-seen order
    pub fn years(&self) -> Vec<&Year> {
        let mut years: Vec<&Year> = Vec::new();
        for year in self.records.iter().filter_map(|r| r.year.as_ref()) {
            if !years.contains(&year) {
                years.push(year);
            }
        }
        years
    }

    /// List records matching `query`, in collection order
    ///
    /// Returns [`LookupError::NoRecords`] rather than an empty list.
    #[instrument(skip(self), level = "debug")]
    pub fn list(&self, query: &ListQuery) -> Result<Vec<&AllowanceRecord>, LookupError> {
        let country = query.country_needle();
        let year = query.year_label();

        let matches: Vec<&AllowanceRecord> = self
            .records
            .iter()
            .filter(|r| country.as_deref().map_or(true, |c| r.country_contains(c)))
            .filter(|r| year.map_or(true, |y| r.year_equals(y)))
            .collect();

        trace!(matched = matches.len(), "listed records");

        if matches.is_empty() {
            Err(LookupError::NoRecords)
        } else {
            Ok(matches)
        }
    }

    /// Find the first record whose code equals `code`, ignoring case
    #[instrument(skip(self), level = "debug")]
    pub fn find_by_code(&self, code: &str) -> Result<&AllowanceRecord, LookupError> {
        if code.is_empty() {
            return Err(LookupError::MissingCode);
        }
        let code = code.to_lowercase();
        self.records
            .iter()
            .find(|r| r.code_equals(&code))
            .ok_or(LookupError::CodeNotFound)
    }

    /// Find the first record named `country`, ignoring case
    ///
    /// Hyphens in `country` stand for spaces, so `Franska-Polynesien` finds
    /// "Franska Polynesien". The whole name must match.
    #[instrument(skip(self), level = "debug")]
    pub fn find_by_country(&self, country: &str) -> Result<&AllowanceRecord, LookupError> {
        if country.is_empty() {
            return Err(LookupError::MissingCountry);
        }
        let name = normalize_country_slug(country);
        self.records
            .iter()
            .find(|r| r.country_equals(&name))
            .ok_or(LookupError::CountryNotFound)
    }
}

impl From<Vec<AllowanceRecord>> for AllowanceDirectory {
    fn from(records: Vec<AllowanceRecord>) -> Self {
        AllowanceDirectory::new(records)
    }
}
