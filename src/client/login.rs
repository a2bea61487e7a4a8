//! `POST /authenticate`: exchange credentials for a fresh token pair.

// self
use crate::{
	_prelude::*,
	client::AuthClient,
	http::AuthHttpClient,
	model::{Agent, AuthenticatePayload, AuthenticateResponse},
	obs::{FlowKind, FlowSpan, flow_debug},
	server::Endpoint,
};

/// Optional knobs for [`AuthClient::login_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoginOptions {
	/// Ask the server to include the account `user` block.
	pub request_user: bool,
}
impl LoginOptions {
	/// Overrides the `requestUser` flag.
	pub fn request_user(mut self, request_user: bool) -> Self {
		self.request_user = request_user;

		self
	}
}

impl<C> AuthClient<C>
where
	C: ?Sized + AuthHttpClient,
{
	/// Logs in with the account credentials, sending `requestUser: false`.
	///
	/// Credentials are not retained. On success both stored tokens are replaced with the
	/// response's `accessToken`/`clientToken`; on failure they are left unchanged.
	pub async fn login(&self, username: &str, password: &str) -> Result<AuthenticateResponse> {
		self.login_with(username, password, LoginOptions::default()).await
	}

	/// Logs in with explicit [`LoginOptions`].
	pub async fn login_with(
		&self,
		username: &str,
		password: &str,
		options: LoginOptions,
	) -> Result<AuthenticateResponse> {
		const KIND: FlowKind = FlowKind::Login;

		let span = FlowSpan::new(KIND, "login", self.state());

		self.record_attempt(&span);

		let flow = &span;
		let result = span
			.instrument(async move {
				let _serialized = self.flow_guard.lock().await;
				let client_token = self.session.read().client_token.clone();
				let payload = AuthenticatePayload {
					agent: Agent::MINECRAFT,
					username,
					password,
					client_token: client_token.expose(),
					request_user: options.request_user,
				};
				let response: AuthenticateResponse =
					self.exchange(flow, Endpoint::Authenticate, &payload).await?;

				self.session.write().rotate(&response.access_token, &response.client_token);

				flow_debug!(
					profiles = response.available_profiles.len(),
					"Session tokens replaced after login."
				);

				Ok(response)
			})
			.await;

		self.record_outcome(&span, &result);

		result
	}
}
