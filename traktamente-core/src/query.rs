//! Query inputs for directory lookups

use crate::error::LookupError;
use serde::{Deserialize, Serialize};

/// Filters for listing records
///
/// Both filters are optional and combine with AND. A blank value counts as
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive substring of the country or territory name
    #[serde(default)]
    pub country: Option<String>,

    /// Exact year label
    #[serde(default)]
    pub year: Option<String>,
}

impl ListQuery {
    /// Query matching every record
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to names containing `country`
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Restrict to the exact year label `year`
    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Build from decoded query-string pairs
    ///
    /// Keys other than `country` and `year` are ignored. A filter given more
    /// than once can never match a record, so it yields
    /// [`LookupError::NoRecords`].
    pub fn from_pairs<I>(pairs: I) -> Result<Self, LookupError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "country" => &mut query.country,
                "year" => &mut query.year,
                _ => continue,
            };
            if slot.replace(value).is_some() {
                return Err(LookupError::NoRecords);
            }
        }
        Ok(query)
    }

    /// Lowercased country needle, if the filter is active
    pub(crate) fn country_needle(&self) -> Option<String> {
        non_blank(self.country.as_deref()).map(str::to_lowercase)
    }

    /// Year label, if the filter is active
    pub(crate) fn year_label(&self) -> Option<&str> {
        non_blank(self.year.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Turn a URL slug like `Franska-Polynesien` into the lowercased name
/// `franska polynesien`
pub fn normalize_country_slug(slug: &str) -> String {
    slug.replace('-', " ").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_country_slug() {
        assert_eq!(normalize_country_slug("Franska-Polynesien"), "franska polynesien");
        assert_eq!(normalize_country_slug("USA"), "usa");
        assert_eq!(normalize_country_slug("Bosnien-och-Hercegovina"), "bosnien och hercegovina");
        assert_eq!(normalize_country_slug("--"), "  ");
    }

    #[test]
    fn test_blank_filters_are_inactive() {
        let query = ListQuery::all().country("").year("");
        assert_eq!(query.country_needle(), None);
        assert_eq!(query.year_label(), None);
    }

    #[test]
    fn test_country_needle_is_lowercased() {
        let query = ListQuery::all().country("USA");
        assert_eq!(query.country_needle().as_deref(), Some("usa"));
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_pairs() {
        let query = ListQuery::from_pairs(pairs(&[("year", "2024"), ("page", "2"), ("country", "usa")]))
            .unwrap();
        assert_eq!(query, ListQuery::all().country("usa").year("2024"));

        assert_eq!(ListQuery::from_pairs(Vec::new()), Ok(ListQuery::all()));
    }

    #[test]
    fn test_from_pairs_repeated_filter_matches_nothing() {
        assert_eq!(
            ListQuery::from_pairs(pairs(&[("year", "2023"), ("year", "2024")])),
            Err(LookupError::NoRecords)
        );
        assert_eq!(
            ListQuery::from_pairs(pairs(&[("country", "USA"), ("country", "")])),
            Err(LookupError::NoRecords)
        );
    }

    #[test]
    fn test_year_label_is_not_trimmed() {
        let query = ListQuery::all().year(" 2024");
        assert_eq!(query.year_label(), Some(" 2024"));
    }
}
