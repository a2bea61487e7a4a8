//! Request payloads sent to the authentication server.

// self
use crate::{_prelude::*, model::ProfileSummary};

/// Agent descriptor announced on every `/authenticate` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Agent {
	/// Game name.
	pub name: &'static str,
	/// Agent protocol version.
	pub version: u32,
}
impl Agent {
	/// The fixed `Minecraft` agent, version 1.
	pub const MINECRAFT: Self = Self { name: "Minecraft", version: 1 };
}

/// Body of `POST /authenticate`.
///
/// The password is borrowed for the duration of the call and never stored.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatePayload<'a> {
	/// Agent descriptor.
	pub agent: Agent,
	/// Account login name.
	pub username: &'a str,
	/// Account password.
	pub password: &'a str,
	/// Client token currently held by the caller; empty lets the server assign one.
	pub client_token: &'a str,
	/// Whether to include the account `user` block in the response.
	pub request_user: bool,
}
impl Debug for AuthenticatePayload<'_> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthenticatePayload")
			.field("agent", &self.agent)
			.field("username", &self.username)
			.field("password", &"<redacted>")
			.field("request_user", &self.request_user)
			.finish()
	}
}

/// Body of `POST /refresh`.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshPayload<'a> {
	/// Access token being rotated.
	pub access_token: &'a str,
	/// Client token the access token was issued to.
	pub client_token: &'a str,
	/// Profile to bind the new access token to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub selected_profile: Option<&'a ProfileSummary>,
	/// Whether to include the account `user` block in the response.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub request_user: Option<bool>,
}
impl Debug for RefreshPayload<'_> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RefreshPayload")
			.field("selected_profile", &self.selected_profile)
			.field("request_user", &self.request_user)
			.finish_non_exhaustive()
	}
}
