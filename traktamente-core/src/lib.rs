//! Traktamente Core - Swedish foreign allowance rates
//!
//! This crate holds the allowance dataset and the lookups served over it:
//! listing with country/year filters, and single-record lookups by code or
//! by country or territory name.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod dataset;
pub mod directory;
pub mod error;
pub mod query;
pub mod record;

pub use directory::AllowanceDirectory;
pub use error::{DirectoryError, LookupError, LookupErrorKind, Result};
pub use query::{normalize_country_slug, ListQuery};
pub use record::{AllowanceRecord, Year, COUNTRY_KEY};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
