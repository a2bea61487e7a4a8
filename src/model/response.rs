//! Response records returned by the authentication server.

// self
use crate::{
	_prelude::*,
	model::{Profile, ProfileSummary, User, UserSummary},
};

/// Successful `/authenticate` response.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticateResponse {
	/// Newly issued access token.
	pub access_token: String,
	/// Client token the access token is bound to.
	pub client_token: String,
	/// Profiles owned by the account, in server order.
	#[serde(default)]
	pub available_profiles: Vec<Profile>,
	/// Profile the access token is bound to; accounts without a game purchase have none.
	#[serde(default)]
	pub selected_profile: Option<Profile>,
	/// Account metadata, present when requested.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub user: Option<User>,
}
impl Debug for AuthenticateResponse {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthenticateResponse")
			.field("access_token", &"<redacted>")
			.field("client_token", &"<redacted>")
			.field("available_profiles", &self.available_profiles)
			.field("selected_profile", &self.selected_profile)
			.field("user", &self.user)
			.finish()
	}
}

/// Successful `/refresh` response.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
	/// Newly issued access token.
	pub access_token: String,
	/// Client token the access token is bound to.
	pub client_token: String,
	/// Profile the access token is bound to.
	#[serde(default)]
	pub selected_profile: Option<ProfileSummary>,
	/// Account metadata, present when requested.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub user: Option<UserSummary>,
}
impl Debug for RefreshResponse {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RefreshResponse")
			.field("access_token", &"<redacted>")
			.field("client_token", &"<redacted>")
			.field("selected_profile", &self.selected_profile)
			.field("user", &self.user)
			.finish()
	}
}

/// Error document returned with non-200 responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseError {
	/// Error category, e.g. `ForbiddenOperationException`.
	pub error: String,
	/// Human-readable description.
	#[serde(default)]
	pub error_message: String,
	/// Optional cause.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error_cause: Option<String>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn authenticate_response_parses_full_document() {
		let body = r#"{
			"accessToken": "tok1",
			"clientToken": "abc",
			"availableProfiles": [
				{ "agent": "minecraft", "id": "p1", "name": "Alice", "paid": true },
				{ "agent": "minecraft", "id": "p2", "name": "Alt" }
			],
			"selectedProfile": { "id": "p1", "name": "Alice" }
		}"#;
		let response: AuthenticateResponse =
			serde_json::from_str(body).expect("Authenticate response should parse.");

		assert_eq!(response.access_token, "tok1");
		assert_eq!(response.available_profiles.len(), 2);
		assert_eq!(response.available_profiles[1].name, "Alt");
		assert_eq!(
			response.selected_profile.as_ref().map(Profile::summary),
			Some(ProfileSummary { id: "p1".into(), name: "Alice".into() })
		);
		assert!(response.user.is_none());

		let debug = format!("{response:?}");

		assert!(!debug.contains("tok1"));
	}

	#[test]
	fn response_error_accepts_missing_cause() {
		let error: ResponseError = serde_json::from_str(
			r#"{"error":"ForbiddenOperationException","errorMessage":"Invalid credentials."}"#,
		)
		.expect("Error body should parse.");

		assert_eq!(error.error_cause, None);
		assert_eq!(error.error_message, "Invalid credentials.");
	}
}
