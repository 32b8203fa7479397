//! API response types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDescription {
    /// What the API is for
    pub message: String,

    /// What "traktamente" means
    pub description: String,

    /// Every route serving allowance data
    pub endpoints: Vec<EndpointInfo>,

    /// Route path to human-readable explanation
    pub explanation: Map<String, Value>,

    /// Sample request URLs with what they return
    pub examples: Map<String, Value>,
}

/// One route in the service description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointInfo {
    /// Route path, with `:name` for path parameters
    pub path: String,

    /// Accepted HTTP methods
    pub methods: Vec<String>,
}
