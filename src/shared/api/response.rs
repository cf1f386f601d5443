// src/shared/api/response.rs
use serde::Serialize;

use crate::password::application::domain::entities::{ValidationError, ValidationOutcome};

/// Response body a host can return after a password change or registration
/// attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ReportedError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportedError {
    pub code: String,
    pub message: String,
}

impl From<&ValidationError> for ReportedError {
    fn from(error: &ValidationError) -> Self {
        Self {
            code: error.code.clone(),
            message: error.description.clone(),
        }
    }
}

impl From<&ValidationOutcome> for ValidationReport {
    fn from(outcome: &ValidationOutcome) -> Self {
        Self {
            success: outcome.succeeded(),
            errors: outcome.errors().iter().map(ReportedError::from).collect(),
        }
    }
}
