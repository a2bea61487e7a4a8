//! Session state held by an [`AuthClient`](crate::client::AuthClient).

pub mod secret;

pub use secret::*;

// self
use crate::_prelude::*;

/// Authentication state derived from the stored access token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionState {
	/// No access token has been obtained yet.
	Unauthenticated,
	/// An access token is held.
	Authenticated,
}
impl SessionState {
	/// Returns a stable label suitable for span fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			SessionState::Unauthenticated => "unauthenticated",
			SessionState::Authenticated => "authenticated",
		}
	}
}
impl Display for SessionState {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Access/client token pair.
///
/// Serializes with the server's field names so a saved session can be restored later via
/// [`AuthClientBuilder::session`](crate::client::AuthClientBuilder::session).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
	/// Current access token; empty until a successful login or refresh.
	pub access_token: AccessToken,
	/// Current client token; caller-supplied or server-assigned.
	pub client_token: ClientToken,
}
impl Session {
	/// Creates an unauthenticated session carrying only a client token.
	pub fn with_client_token(client_token: impl Into<ClientToken>) -> Self {
		Self { access_token: AccessToken::default(), client_token: client_token.into() }
	}

	/// Creates a session from a previously issued token pair.
	pub fn new(access_token: impl Into<AccessToken>, client_token: impl Into<ClientToken>) -> Self {
		Self { access_token: access_token.into(), client_token: client_token.into() }
	}

	/// Returns the state implied by the access token.
	pub fn state(&self) -> SessionState {
		if self.access_token.is_empty() {
			SessionState::Unauthenticated
		} else {
			SessionState::Authenticated
		}
	}

	/// Replaces both tokens with the values the server returned.
	pub(crate) fn rotate(&mut self, access_token: &str, client_token: &str) {
		self.access_token = AccessToken::new(access_token);
		self.client_token = ClientToken::new(client_token);
	}
}
