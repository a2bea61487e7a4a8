//! Transport primitives for authentication server calls.
//!
//! [`AuthHttpClient`] is the client's only dependency on an HTTP stack. Implementations send a
//! JSON body with `Content-Type: application/json` and hand back the raw status, metadata, and
//! body; interpreting the response stays with [`AuthClient`](crate::client::AuthClient).

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")]
use reqwest::{
	header::{CONTENT_TYPE, HeaderMap, RETRY_AFTER},
	redirect::Policy,
};
#[cfg(feature = "reqwest")] use time::format_description::well_known::Rfc2822;
// self
use crate::{_prelude::*, error::TransportError};

/// Future returned by [`AuthHttpClient::post_json`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<RawResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports able to POST JSON documents to the authentication server.
///
/// Implementations must be `Send + Sync + 'static` so a client can be shared behind `Arc`
/// and its futures can hop executors. Transport failures (DNS, TCP, TLS) are reported as
/// [`TransportError`] without further classification.
pub trait AuthHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Sends `body` (already serialized JSON) as a `POST` to `url`.
	fn post_json(&self, url: Url, body: Vec<u8>) -> TransportFuture<'_>;
}

/// Metadata captured from an HTTP response for error reporting.
///
/// Additional metadata fields may be added in future releases, so downstream code
/// should construct values using field names instead of struct update syntax.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseMetadata {
	/// HTTP status code returned by the server.
	pub status: u16,
	/// Retry-After hint expressed as a relative duration.
	pub retry_after: Option<Duration>,
}

/// Undecoded response handed back by a transport.
#[derive(Clone, Debug)]
pub struct RawResponse {
	/// Status and header-derived metadata.
	pub metadata: ResponseMetadata,
	/// Raw response body.
	pub body: Vec<u8>,
}
impl RawResponse {
	/// Creates a response with the given status and body and no retry hint.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self { metadata: ResponseMetadata { status, retry_after: None }, body: body.into() }
	}

	/// Returns the HTTP status code.
	pub fn status(&self) -> u16 {
		self.metadata.status
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Authentication calls must not follow redirects: a redirect would resend credentials to
/// another origin. [`ReqwestHttpClient::new`] disables redirects; configure any client passed
/// to [`ReqwestHttpClient::with_client`] the same way.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Builds a client with redirects disabled and no request timeout.
	pub fn new() -> Result<Self> {
		Self::with_timeout(None)
	}

	/// Builds a client with redirects disabled and an optional whole-request timeout.
	pub fn with_timeout(timeout: Option<std::time::Duration>) -> Result<Self> {
		let mut builder = ReqwestClient::builder().redirect(Policy::none());

		if let Some(timeout) = timeout {
			builder = builder.timeout(timeout);
		}

		let client = builder.build().map_err(crate::error::ConfigError::from)?;

		Ok(Self(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl AuthHttpClient for ReqwestHttpClient {
	fn post_json(&self, url: Url, body: Vec<u8>) -> TransportFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let response =
				client.post(url).header(CONTENT_TYPE, "application/json").body(body).send().await?;
			let status = response.status().as_u16();
			let retry_after = parse_retry_after(response.headers());
			let body = response.bytes().await?.to_vec();

			Ok(RawResponse { metadata: ResponseMetadata { status, retry_after }, body })
		})
	}
}

#[cfg(feature = "reqwest")]
fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
	let value = headers.get(RETRY_AFTER)?;
	let raw = value.to_str().ok()?.trim();

	if let Ok(secs) = raw.parse::<u64>() {
		return Some(Duration::seconds(i64::try_from(secs).unwrap_or(i64::MAX)));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}
