//! Session-holding client for the authentication server.
//!
//! [`AuthClient`] owns the access/client token pair and exposes [`AuthClient::login`] and
//! [`AuthClient::refresh`]. Each call performs exactly one `POST` and, on HTTP 200, replaces
//! both stored tokens with the values from the response. Any other status leaves the tokens
//! untouched and surfaces as [`Error::Auth`](crate::error::Error::Auth) (or
//! [`Error::UnexpectedResponse`](crate::error::Error::UnexpectedResponse) when the body is not
//! an error document). Calls on one client are serialized so token updates never interleave.

mod login;
mod metrics;
mod refresh;

pub use login::LoginOptions;
pub use metrics::{FlowCounters, FlowMetrics};
pub use refresh::RefreshOptions;

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	error::{AuthError, ConfigError},
	http::{AuthHttpClient, RawResponse},
	model::ResponseError,
	obs::{FlowOutcome, FlowSpan},
	server::{AuthServer, Endpoint},
	session::{ClientToken, Session, SessionState},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestAuthClient = AuthClient<ReqwestHttpClient>;

/// Holds session tokens and performs login/refresh calls against one server.
pub struct AuthClient<C>
where
	C: ?Sized + AuthHttpClient,
{
	/// HTTP client used for every outbound request.
	pub http_client: Arc<C>,
	/// Server the client talks to.
	pub server: AuthServer,
	/// Per-client attempt/success/failure counters.
	pub metrics: Arc<FlowMetrics>,
	session: RwLock<Session>,
	flow_guard: AsyncMutex<()>,
}
impl<C> AuthClient<C>
where
	C: ?Sized + AuthHttpClient,
{
	/// Creates an unauthenticated client with an empty client token.
	pub fn with_http_client(server: AuthServer, http_client: impl Into<Arc<C>>) -> Self {
		Self {
			http_client: http_client.into(),
			server,
			metrics: Default::default(),
			session: RwLock::new(Session::default()),
			flow_guard: AsyncMutex::new(()),
		}
	}

	/// Sets the client token sent with the next login.
	pub fn with_client_token(mut self, client_token: impl Into<ClientToken>) -> Self {
		self.session.get_mut().client_token = client_token.into();

		self
	}

	/// Restores a previously issued token pair.
	pub fn with_session(mut self, session: Session) -> Self {
		*self.session.get_mut() = session;

		self
	}

	/// Returns a snapshot of the current token pair.
	pub fn session(&self) -> Session {
		self.session.read().clone()
	}

	/// Returns whether an access token is currently held.
	pub fn state(&self) -> SessionState {
		self.session.read().state()
	}

	/// Serializes `payload`, posts it to `endpoint`, and decodes the response.
	async fn exchange<P, R>(&self, span: &FlowSpan, endpoint: Endpoint, payload: &P) -> Result<R>
	where
		P: ?Sized + Serialize + Sync,
		R: DeserializeOwned,
	{
		let url = self.server.endpoint(endpoint)?;
		let body = serde_json::to_vec(payload).map_err(ConfigError::from)?;
		let response = self.http_client.post_json(url, body).await?;

		span.record_status(response.status());

		decode_response(response)
	}

	fn record_attempt(&self, span: &FlowSpan) {
		self.metrics.counters(span.kind()).record(FlowOutcome::Attempt);
		span.record_outcome(FlowOutcome::Attempt);
	}

	fn record_outcome<T>(&self, span: &FlowSpan, result: &Result<T>) {
		let outcome = if result.is_ok() { FlowOutcome::Success } else { FlowOutcome::Failure };

		self.metrics.counters(span.kind()).record(outcome);
		span.record_outcome(outcome);
	}
}
#[cfg(feature = "reqwest")]
impl AuthClient<ReqwestHttpClient> {
	/// Creates a client for the public Mojang server.
	///
	/// `client_token` is sent verbatim on the first login; `None` sends an empty token and
	/// lets the server assign one.
	pub fn new(client_token: Option<&str>) -> Result<Self> {
		let mut builder = Self::builder();

		if let Some(client_token) = client_token {
			builder = builder.client_token(client_token);
		}

		builder.build()
	}

	/// Returns a builder for reqwest-backed clients.
	pub fn builder() -> AuthClientBuilder {
		AuthClientBuilder::default()
	}
}
impl<C> Debug for AuthClient<C>
where
	C: ?Sized + AuthHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthClient")
			.field("server", &self.server)
			.field("state", &self.state())
			.finish_non_exhaustive()
	}
}

/// Builder for [`ReqwestAuthClient`] values.
#[cfg(feature = "reqwest")]
#[derive(Debug, Default)]
pub struct AuthClientBuilder {
	/// Server descriptor; defaults to the public Mojang server.
	pub server: Option<AuthServer>,
	/// Initial token pair.
	pub session: Session,
	/// Preconfigured transport; takes precedence over `timeout`.
	pub http_client: Option<ReqwestHttpClient>,
	/// Whole-request timeout applied to the default transport.
	pub timeout: Option<std::time::Duration>,
}
#[cfg(feature = "reqwest")]
impl AuthClientBuilder {
	/// Overrides the server descriptor.
	pub fn server(mut self, server: AuthServer) -> Self {
		self.server = Some(server);

		self
	}

	/// Sets the client token sent with the first login.
	pub fn client_token(mut self, client_token: impl Into<ClientToken>) -> Self {
		self.session.client_token = client_token.into();

		self
	}

	/// Restores a previously issued token pair.
	pub fn session(mut self, session: Session) -> Self {
		self.session = session;

		self
	}

	/// Uses a caller-configured transport.
	pub fn http_client(mut self, http_client: ReqwestHttpClient) -> Self {
		self.http_client = Some(http_client);

		self
	}

	/// Applies a whole-request timeout to the default transport.
	pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Builds the client, constructing the default transport when none was supplied.
	pub fn build(self) -> Result<ReqwestAuthClient> {
		let http_client = match self.http_client {
			Some(http_client) => http_client,
			None => ReqwestHttpClient::with_timeout(self.timeout)?,
		};
		let server = self.server.unwrap_or_default();

		Ok(AuthClient::with_http_client(server, http_client).with_session(self.session))
	}
}

fn decode_response<R>(response: RawResponse) -> Result<R>
where
	R: DeserializeOwned,
{
	let success = response.status() == 200;
	let RawResponse { metadata, body } = response;

	if !success {
		return Err(match serde_json::from_slice::<ResponseError>(&body) {
			Ok(error) => AuthError::from_response(&metadata, error).into(),
			Err(_) => Error::unexpected_response(&metadata, &body),
		});
	}

	let mut deserializer = serde_json::Deserializer::from_slice(&body);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| Error::Parse { source, status: metadata.status })
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::model::AuthenticateResponse;

	#[test]
	fn decode_maps_error_documents() {
		let response = RawResponse::new(
			403,
			r#"{"error":"ForbiddenOperationException","errorMessage":"Invalid credentials."}"#,
		);
		let err = decode_response::<AuthenticateResponse>(response)
			.expect_err("Non-200 responses should fail.");
		let auth = err.as_auth().expect("Error documents should map to AuthError.");

		assert_eq!(auth.status, 403);
		assert_eq!(err.to_string(), "ForbiddenOperationException: Invalid credentials.");
	}

	#[test]
	fn decode_accepts_only_status_200() {
		let response = RawResponse::new(201, r#"{"accessToken":"tok","clientToken":"abc"}"#);

		assert_eq!(response.status(), 201);

		let err = decode_response::<AuthenticateResponse>(response)
			.expect_err("Only HTTP 200 should count as success.");

		assert!(matches!(err, Error::UnexpectedResponse { status: 201, .. }));
	}

	#[test]
	fn decode_maps_unrecognized_error_bodies() {
		let response = RawResponse::new(503, "<html>Service Unavailable</html>");
		let err = decode_response::<AuthenticateResponse>(response)
			.expect_err("Non-200 responses should fail.");

		assert!(matches!(err, Error::UnexpectedResponse { status: 503, .. }));
	}

	#[test]
	fn decode_reports_parse_path() {
		let response = RawResponse::new(200, r#"{"accessToken":"tok","clientToken":7}"#);
		let err = decode_response::<AuthenticateResponse>(response)
			.expect_err("Malformed success bodies should fail.");

		match err {
			Error::Parse { source, status } => {
				assert_eq!(status, 200);
				assert_eq!(source.path().to_string(), "clientToken");
			},
			other => panic!("Unexpected error variant: {other:?}."),
		}
	}
}
