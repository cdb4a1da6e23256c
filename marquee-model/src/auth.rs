//! Wire types of the token/session authentication endpoints.
//!
//! `expires_at` values are kept as opaque strings: the catalog emits a
//! non-RFC3339 format and nothing downstream computes with them.

use serde::{Deserialize, Serialize};

/// Response of the request-token endpoint; the token is approved by the
/// user in an external browser before it can be exchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestToken {
    pub success: bool,
    pub request_token: String,
    #[serde(default)]
    pub expires_at: String,
}

/// Response of the session-exchange endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCreated {
    pub success: bool,
    pub session_id: String,
}

/// Response of the guest-session endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestSessionCreated {
    pub success: bool,
    pub guest_session_id: String,
    #[serde(default)]
    pub expires_at: String,
}

/// Generic success envelope returned by session deletion and the
/// personal-list mutation endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatus {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_token_parses_catalog_shape() {
        let token: RequestToken = serde_json::from_str(
            r#"{
                "success": true,
                "expires_at": "2026-08-26 17:04:39 UTC",
                "request_token": "ff5c7eeb5a8870efe3cd7fc5c282cffd26800ecd"
            }"#,
        )
        .unwrap();
        assert!(token.success);
        assert_eq!(token.request_token.len(), 40);
    }

    #[test]
    fn session_created_requires_session_id() {
        assert!(serde_json::from_str::<SessionCreated>(r#"{"success": true}"#).is_err());
    }

    #[test]
    fn guest_session_parses_catalog_shape() {
        let guest: GuestSessionCreated = serde_json::from_str(
            r#"{
                "success": true,
                "guest_session_id": "1ce82ec1223641636ad4a60b07de3581",
                "expires_at": "2026-08-27 16:26:40 UTC"
            }"#,
        )
        .unwrap();
        assert!(guest.success);
        assert_eq!(guest.guest_session_id.len(), 32);
    }
}
