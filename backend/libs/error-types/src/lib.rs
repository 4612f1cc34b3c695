//! Shared error envelope for HTTP services
//!
//! Every service renders failures with the same JSON shape so that clients
//! can branch on `code` without parsing `message`.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Stable machine-readable error codes
pub mod error_codes {
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const COMPANY_NOT_FOUND: &str = "COMPANY_NOT_FOUND";
    pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
}

/// JSON body returned for every non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// Reason phrase of the HTTP status ("Not Found", ...)
    pub error: String,
    /// Human-readable description
    pub message: String,
    pub status: u16,
    #[serde(rename = "type")]
    pub error_type: String,
    pub code: String,
    /// RFC 3339 timestamp of when the error was produced
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str, status: u16, error_type: &str, code: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            status,
            error_type: error_type.to_string(),
            code: code.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_type_field_name() {
        let response = ErrorResponse::new(
            "Not Found",
            "Company not found",
            404,
            "not_found_error",
            error_codes::COMPANY_NOT_FOUND,
        );

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["type"], "not_found_error");
        assert_eq!(json["code"], "COMPANY_NOT_FOUND");
        assert_eq!(json["status"], 404);
        assert!(json.get("error_type").is_none());
    }
}
