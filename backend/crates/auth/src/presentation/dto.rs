//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Sign up response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub username: String,
}

// ============================================================================
// Log In
// ============================================================================

/// Log in request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogInRequest {
    pub username: String,
    pub password: String,
}

/// Log in response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_field_name() {
        let body = serde_json::to_string(&TokenResponse {
            access_token: "t".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"accessToken":"t"}"#);
    }

    #[test]
    fn test_sign_up_request_parses() {
        let req: SignUpRequest = serde_json::from_str(
            r#"{"username":"alice","email":"a@example.com","password":"pw"}"#,
        )
        .unwrap();
        assert_eq!(req.username, "alice");
    }
}
