use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorMessage {
    pub message: String,
}

/// Error body in the shape `{"error": {"message": "..."}}`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: ErrorMessage,
}

impl ErrorResponse {
    pub fn new(msg: &str) -> Self {
        ErrorResponse {
            error: ErrorMessage {
                message: msg.to_owned(),
            },
        }
    }
}

/// Body returned by the bearer token gate.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct UnauthorizedResponse {
    pub error: String,
}

impl Default for UnauthorizedResponse {
    fn default() -> Self {
        UnauthorizedResponse {
            error: "Unauthorized request".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_nests_message() {
        let body = serde_json::to_value(ErrorResponse::new("Bookmark not found")).unwrap();
        assert_eq!(body, serde_json::json!({"error": {"message": "Bookmark not found"}}));
    }
}
