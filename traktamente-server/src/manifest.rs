//! Static route manifest
//!
//! The router is built from the same path constants, so the description
//! served at `/` cannot drift from what is actually routed.

use crate::api::{EndpointInfo, ServiceDescription};
use serde_json::{Map, Value};

/// Service description
pub const ROOT: &str = "/";
/// List with optional `country` and `year` filters
pub const LIST: &str = "/traktamente";
/// Lookup by country code
pub const BY_CODE: &str = "/traktamente/code/:code";
/// Lookup by country or territory name
pub const BY_COUNTRY: &str = "/traktamente/country/:country";

/// A documented route
#[derive(Debug, Clone, Copy)]
pub struct RouteSpec {
    /// Route path
    pub path: &'static str,
    /// Accepted methods
    pub methods: &'static [&'static str],
    /// Explanation shown at `/`
    pub explanation: &'static str,
}

/// All documented routes, in the order they are listed
pub const ROUTES: [RouteSpec; 4] = [
    RouteSpec {
        path: ROOT,
        methods: &["GET"],
        explanation: "This description of the API and its endpoints",
    },
    RouteSpec {
        path: LIST,
        methods: &["GET"],
        explanation: "Get all data of countries, allowance, and year. \
            Filter with ?country= (part of the name, any case) and ?year= (exact year)",
    },
    RouteSpec {
        path: BY_CODE,
        methods: &["GET"],
        explanation: "Get data by country code (e.g., /traktamente/code/PF)",
    },
    RouteSpec {
        path: BY_COUNTRY,
        methods: &["GET"],
        explanation: "Get data by country or territory name, with hyphens for spaces \
            (e.g., /traktamente/country/Franska-Polynesien)",
    },
];

const EXAMPLES: [(&str, &str); 4] = [
    (
        "/traktamente?year=2024",
        "Get all data of countries and allowance in year 2024",
    ),
    (
        "/traktamente?country=USA",
        "Get allowance of USA in years 2023 and 2024",
    ),
    (
        "/traktamente?country=USA&year=2024",
        "Only get allowance of USA in year 2024",
    ),
    (
        "/traktamente/country/Franska-Polynesien",
        "Get the allowance of Franska Polynesien",
    ),
];

const MESSAGE: &str = "This API is made to search Utlandstraktamenten (allowance abroad) \
    since 2023 based on the Swedish Tax Agency's general advice.";

const DESCRIPTION: &str = "Traktamenten is a Swedish term related to the allowance on \
    increased living expenses abroad for business trips, temporary work, and dual residence.";

/// Build the body served at `/`
pub fn service_description() -> ServiceDescription {
    let endpoints = ROUTES
        .iter()
        .map(|route| EndpointInfo {
            path: route.path.to_string(),
            methods: route.methods.iter().map(|m| m.to_string()).collect(),
        })
        .collect();

    let explanation: Map<String, Value> = ROUTES
        .iter()
        .map(|route| (route.path.to_string(), Value::from(route.explanation)))
        .collect();

    let examples: Map<String, Value> = EXAMPLES
        .iter()
        .map(|(url, text)| (url.to_string(), Value::from(*text)))
        .collect();

    ServiceDescription {
        message: MESSAGE.to_string(),
        description: DESCRIPTION.to_string(),
        endpoints,
        explanation,
        examples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_lists_four_endpoints() {
        let desc = service_description();
        assert_eq!(desc.endpoints.len(), 4);
        assert_eq!(desc.explanation.len(), 4);

        let paths: Vec<&str> = desc.endpoints.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec![ROOT, LIST, BY_CODE, BY_COUNTRY]);
        for path in paths {
            assert!(desc.explanation.contains_key(path));
        }
    }

    #[test]
    fn test_explanation_keeps_route_order() {
        let desc = service_description();
        let keys: Vec<&str> = desc.explanation.keys().map(String::as_str).collect();
        assert_eq!(keys, vec![ROOT, LIST, BY_CODE, BY_COUNTRY]);
    }

    #[test]
    fn test_examples_point_at_documented_routes() {
        let desc = service_description();
        for url in desc.examples.keys() {
            assert!(url.starts_with(LIST), "unexpected example {}", url);
        }
    }
}
