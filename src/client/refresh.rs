//! `POST /refresh`: rotate the stored access token.

// self
use crate::{
	_prelude::*,
	client::AuthClient,
	http::AuthHttpClient,
	model::{ProfileSummary, RefreshPayload, RefreshResponse},
	obs::{FlowKind, FlowSpan, flow_debug},
	server::Endpoint,
	session::SessionState,
};

/// Optional fields for [`AuthClient::refresh_with`].
///
/// The default sends only the two tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RefreshOptions {
	/// Profile to bind the new access token to.
	pub selected_profile: Option<ProfileSummary>,
	/// Explicit `requestUser` flag; omitted from the body when `None`.
	pub request_user: Option<bool>,
}
impl RefreshOptions {
	/// Binds the refreshed token to `profile`.
	pub fn select_profile(mut self, profile: ProfileSummary) -> Self {
		self.selected_profile = Some(profile);

		self
	}

	/// Sets the `requestUser` flag.
	pub fn request_user(mut self, request_user: bool) -> Self {
		self.request_user = Some(request_user);

		self
	}
}

impl<C> AuthClient<C>
where
	C: ?Sized + AuthHttpClient,
{
	/// Refreshes the session, sending exactly `{accessToken, clientToken}`.
	///
	/// Fails with [`Error::NotAuthenticated`] without contacting the server when no access
	/// token is held.
	pub async fn refresh(&self) -> Result<RefreshResponse> {
		self.refresh_with(RefreshOptions::default()).await
	}

	/// Refreshes the session with explicit [`RefreshOptions`].
	pub async fn refresh_with(&self, options: RefreshOptions) -> Result<RefreshResponse> {
		const KIND: FlowKind = FlowKind::Refresh;

		let span = FlowSpan::new(KIND, "refresh", self.state());

		self.record_attempt(&span);

		let flow = &span;
		let result = span
			.instrument(async move {
				let _serialized = self.flow_guard.lock().await;
				let session = self.session();

				if session.state() == SessionState::Unauthenticated {
					return Err(Error::NotAuthenticated);
				}

				let payload = RefreshPayload {
					access_token: session.access_token.expose(),
					client_token: session.client_token.expose(),
					selected_profile: options.selected_profile.as_ref(),
					request_user: options.request_user,
				};
				let response: RefreshResponse =
					self.exchange(flow, Endpoint::Refresh, &payload).await?;

				self.session.write().rotate(&response.access_token, &response.client_token);

				flow_debug!(
					profile_bound = response.selected_profile.is_some(),
					"Session tokens replaced after refresh."
				);

				Ok(response)
			})
			.await;

		self.record_outcome(&span, &result);

		result
	}
}
