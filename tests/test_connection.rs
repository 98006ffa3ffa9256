//! Connection tests: URL building, bearer headers and error mapping.

mod common;

use httpmock::prelude::*;
use serde_json::json;
use solspy_sdk::{Connection, SessionStore, SolSpyError, SolSpySdk};
use std::time::Duration;

// ---------------------------------------------------------------------------
// URLs
// ---------------------------------------------------------------------------

#[test]
fn url_joins_base_and_path() {
    let conn = Connection::new(
        "http://localhost:8080/api/",
        Duration::from_secs(5),
        SessionStore::in_memory(),
    )
    .unwrap();
    assert_eq!(conn.base_url(), "http://localhost:8080/api");
    assert_eq!(conn.url("users/login"), "http://localhost:8080/api/users/login");
    assert_eq!(conn.url("/tracked-wallet/"), "http://localhost:8080/api/tracked-wallet/");
}

#[test]
fn empty_base_url_is_rejected() {
    let result = SolSpySdk::builder().base_url("  ").build();
    assert!(matches!(result, Err(SolSpyError::InvalidArgument(_))));
}

// ---------------------------------------------------------------------------
// Authorization
// ---------------------------------------------------------------------------

#[test]
fn authorized_requests_carry_bearer_token() {
    let (server, sdk) = common::setup_sdk();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/users/user")
            .header("Authorization", common::BEARER);
        then.status(200)
            .json_body(json!({"id": 1, "name": "Alice", "login": "alice"}));
    });

    let user = sdk.users().current().unwrap();

    mock.assert();
    assert_eq!(user.login.as_deref(), Some("alice"));
}

#[test]
fn missing_token_fails_before_sending() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.any_request();
        then.status(200).json_body(json!([]));
    });
    let sdk = common::anonymous_sdk(&server);

    let err = sdk.tracked_wallets().list().unwrap_err();

    assert!(matches!(err, SolSpyError::Unauthorized(_)));
    mock.assert_hits(0);
}

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

#[test]
fn unauthorized_status_maps_to_unauthorized() {
    let (server, sdk) = common::setup_sdk();
    server.mock(|when, then| {
        when.method(GET).path("/api/users/user");
        then.status(401).json_body(json!({"detail": "Token not found"}));
    });

    match sdk.users().current() {
        Err(SolSpyError::Unauthorized(detail)) => assert_eq!(detail, "Token not found"),
        other => panic!("expected Unauthorized, got {:?}", other),
    }
}

#[test]
fn not_found_status_maps_to_not_found() {
    let (server, sdk) = common::setup_sdk();
    server.mock(|when, then| {
        when.method(GET).path(format!("/api/tracked-wallet/{}", common::WALLET));
        then.status(404).json_body(json!({"detail": "Wallet not found"}));
    });

    let err = sdk.tracked_wallets().get(common::WALLET).unwrap_err();
    assert!(matches!(err, SolSpyError::NotFound(ref d) if d == "Wallet not found"));
}

#[test]
fn server_error_keeps_status_and_detail() {
    let (server, sdk) = common::setup_sdk();
    server.mock(|when, then| {
        when.method(GET).path("/api/tracked-wallet/bot_tracking_wallets");
        then.status(500)
            .json_body(json!({"detail": "database unavailable"}));
    });

    match sdk.tracked_wallets().list() {
        Err(SolSpyError::Api { status, detail }) => {
            assert_eq!(status, 500);
            assert_eq!(detail, "database unavailable");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[test]
fn structured_detail_is_rendered_as_json() {
    let (server, sdk) = common::setup_sdk();
    server.mock(|when, then| {
        when.method(POST).path("/api/tracked-wallet/");
        then.status(422).json_body(json!({
            "detail": [{"loc": ["body", "wallet_address"], "msg": "field required"}]
        }));
    });

    match sdk.tracked_wallets().add(common::WALLET) {
        Err(SolSpyError::Api { status, detail }) => {
            assert_eq!(status, 422);
            assert!(detail.contains("field required"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[test]
fn plain_text_error_body_is_kept() {
    let (server, sdk) = common::setup_sdk();
    server.mock(|when, then| {
        when.method(GET).path("/api/users/user");
        then.status(502).body("Bad Gateway from proxy");
    });

    match sdk.users().current() {
        Err(SolSpyError::Api { status, detail }) => {
            assert_eq!(status, 502);
            assert_eq!(detail, "Bad Gateway from proxy");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[test]
fn empty_success_body_reads_as_null() {
    let (server, sdk) = common::setup_sdk();
    server.mock(|when, then| {
        when.method(DELETE)
            .path(format!("/api/tracked-wallet/delete/{}", common::WALLET));
        then.status(200);
    });

    let value = sdk
        .connection()
        .delete(&format!("tracked-wallet/delete/{}", common::WALLET))
        .unwrap();
    assert!(value.is_null());
}

#[test]
fn malformed_success_body_is_a_json_error() {
    let (server, sdk) = common::setup_sdk();
    server.mock(|when, then| {
        when.method(GET).path("/api/users/user");
        then.status(200).body("{not json");
    });

    assert!(matches!(sdk.users().current(), Err(SolSpyError::Json(_))));
}
