// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for zone lock error types.

#[cfg(test)]
mod tests {
    use crate::errors::*;

    #[test]
    fn test_not_found_error_names_zone() {
        let error = ZoneLockError::NotFound {
            zone: "ghost.example.com".to_string(),
        };

        assert_eq!(error.to_string(), "Zone 'ghost.example.com' not found");
        assert_eq!(error.kind(), "NotFoundError");
    }

    #[test]
    fn test_auth_error_display() {
        let error = ZoneLockError::Auth {
            status: 401,
            url: "https://10.0.0.1/wapi/v2.12/zone_auth".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Authentication failed for https://10.0.0.1/wapi/v2.12/zone_auth (HTTP 401)"
        );
    }

    #[test]
    fn test_api_error_display() {
        let error = ZoneLockError::Api {
            status: 400,
            url: "https://gm/wapi/v2.12/zone_auth/abc".to_string(),
            message: "Zone is locked".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "WAPI error from https://gm/wapi/v2.12/zone_auth/abc (HTTP 400): Zone is locked"
        );
    }

    #[test]
    fn test_config_helper() {
        let error = ZoneLockError::config("missing key 'gm'");
        assert_eq!(error.to_string(), "Configuration error: missing key 'gm'");
        assert_eq!(error.kind(), "ConfigError");
    }

    #[test]
    fn test_kind_names_are_distinct() {
        let kinds = [
            ZoneLockError::config("").kind(),
            ZoneLockError::parse("").kind(),
            ZoneLockError::Network {
                url: String::new(),
                reason: String::new(),
            }
            .kind(),
            ZoneLockError::Api {
                status: 0,
                url: String::new(),
                message: String::new(),
            }
            .kind(),
        ];
        let mut sorted = kinds.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), kinds.len());
    }
}
