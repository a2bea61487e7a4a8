#![cfg(all(feature = "reqwest", feature = "test"))]

// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use mojang_auth::{
	_preludet::*,
	client::LoginOptions,
	obs::FlowKind,
	session::{Session, SessionState},
};

const CLIENT_TOKEN: &str = "abc";

fn authenticate_success_body() -> serde_json::Value {
	json!({
		"accessToken": "tok1",
		"clientToken": "server-assigned",
		"selectedProfile": { "id": "p1", "name": "Alice" },
		"availableProfiles": [
			{ "agent": "minecraft", "id": "p1", "name": "Alice", "paid": true },
			{ "agent": "minecraft", "id": "p2", "name": "AliceAlt" }
		]
	})
}

#[tokio::test]
async fn login_sends_agent_and_client_token_and_stores_tokens() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.url("/"), CLIENT_TOKEN);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/authenticate")
				.header("content-type", "application/json")
				.json_body(json!({
					"agent": { "name": "Minecraft", "version": 1 },
					"username": "alice",
					"password": "secret",
					"clientToken": CLIENT_TOKEN,
					"requestUser": false
				}));
			then.status(200)
				.header("content-type", "application/json")
				.json_body(authenticate_success_body());
		})
		.await;
	let response = client.login("alice", "secret").await.expect("Login should succeed.");

	mock.assert_async().await;

	assert_eq!(response.access_token, "tok1");
	assert_eq!(response.client_token, "server-assigned");
	assert_eq!(response.available_profiles.len(), 2);
	assert_eq!(response.available_profiles[1].name, "AliceAlt");
	assert_eq!(response.selected_profile.as_ref().map(|profile| profile.id.as_str()), Some("p1"));

	let session = client.session();

	assert_eq!(session.access_token.expose(), "tok1");
	assert_eq!(session.client_token.expose(), "server-assigned");
	assert_eq!(client.state(), SessionState::Authenticated);
	assert_eq!(client.metrics.counters(FlowKind::Login).successes(), 1);
}

#[tokio::test]
async fn login_keeps_echoed_client_token() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.url("/"), CLIENT_TOKEN);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/authenticate");
			then.status(200).header("content-type", "application/json").json_body(json!({
				"accessToken": "tok1",
				"clientToken": CLIENT_TOKEN,
				"selectedProfile": { "id": "p1", "name": "Alice" },
				"availableProfiles": [{ "id": "p1", "name": "Alice" }]
			}));
		})
		.await;

	client.login("alice", "secret").await.expect("Login should succeed.");
	mock.assert_async().await;

	assert_eq!(client.session(), Session::new("tok1", CLIENT_TOKEN));
}

#[tokio::test]
async fn login_failure_formats_server_error_and_keeps_tokens() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.url("/"), CLIENT_TOKEN);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/authenticate");
			then.status(403).header("content-type", "application/json").json_body(json!({
				"error": "ForbiddenOperationException",
				"errorMessage": "Invalid credentials."
			}));
		})
		.await;
	let err = client.login("alice", "wrong").await.expect_err("Login should be rejected.");

	mock.assert_async().await;

	assert_eq!(err.to_string(), "ForbiddenOperationException: Invalid credentials.");

	let auth = err.as_auth().expect("Server errors should map to AuthError.");

	assert_eq!(auth.status, 403);
	assert_eq!(auth.error_cause, None);
	assert_eq!(client.session(), Session::with_client_token(CLIENT_TOKEN));
	assert_eq!(client.state(), SessionState::Unauthenticated);
	assert_eq!(client.metrics.counters(FlowKind::Login).failures(), 1);
}

#[tokio::test]
async fn login_failure_includes_error_cause() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.url("/"), CLIENT_TOKEN);
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/authenticate");
			then.status(410).header("content-type", "application/json").json_body(json!({
				"error": "ForbiddenOperationException",
				"errorMessage": "Migrated",
				"errorCause": "UserMigratedException"
			}));
		})
		.await;
	let err = client.login("alice", "secret").await.expect_err("Login should be rejected.");

	assert_eq!(err.to_string(), "ForbiddenOperationExceptionUserMigratedException: Migrated");
}

#[tokio::test]
async fn login_with_request_user_parses_user_block() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.url("/"), "");
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/authenticate").json_body(json!({
				"agent": { "name": "Minecraft", "version": 1 },
				"username": "alice",
				"password": "secret",
				"clientToken": "",
				"requestUser": true
			}));
			then.status(200).header("content-type", "application/json").json_body(json!({
				"accessToken": "tok2",
				"clientToken": "assigned",
				"selectedProfile": { "id": "p1", "name": "Alice" },
				"availableProfiles": [{ "id": "p1", "name": "Alice" }],
				"user": {
					"id": "u1",
					"email": "alice@example.com",
					"registeredAt": 1325376000000i64,
					"properties": [{ "name": "preferredLanguage", "value": "en" }]
				}
			}));
		})
		.await;
	let response = client
		.login_with("alice", "secret", LoginOptions::default().request_user(true))
		.await
		.expect("Login should succeed.");

	mock.assert_async().await;

	let user = response.user.expect("User block should be present when requested.");

	assert_eq!(user.id, "u1");
	assert_eq!(user.email.as_deref(), Some("alice@example.com"));
	assert_eq!(user.property("preferredLanguage"), Some("en"));
	assert!(user.registered_at().is_some());
}

#[tokio::test]
async fn login_non_json_failure_surfaces_status() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.url("/"), CLIENT_TOKEN);
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/authenticate");
			then.status(502).body("Bad Gateway");
		})
		.await;
	let err = client.login("alice", "secret").await.expect_err("Login should fail.");

	match err {
		Error::UnexpectedResponse { status, body_preview, .. } => {
			assert_eq!(status, 502);
			assert_eq!(body_preview, "Bad Gateway");
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}

	assert_eq!(client.state(), SessionState::Unauthenticated);
}
