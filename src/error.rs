//! Client-level error types shared across the login and refresh calls.

// self
use crate::{_prelude::*, http::ResponseMetadata, model::ResponseError};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const BODY_PREVIEW_LIMIT: usize = 256;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// The authentication server rejected the request with a structured error body.
	#[error(transparent)]
	Auth(#[from] AuthError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// A non-200 response whose body is not a recognizable error document.
	#[error("Authentication server returned HTTP {status}: {body_preview}.")]
	UnexpectedResponse {
		/// HTTP status code returned by the server.
		status: u16,
		/// Retry-After hint from the server, if supplied.
		retry_after: Option<Duration>,
		/// Truncated, lossily decoded response body.
		body_preview: String,
	},
	/// A 200 response whose body could not be parsed.
	#[error("Authentication server returned malformed JSON.")]
	Parse {
		/// Structured parsing failure including the offending field path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
	/// `refresh` was called before any session tokens were obtained.
	#[error("No access token is available; log in before refreshing.")]
	NotAuthenticated,
}
impl Error {
	/// Builds an [`Error::UnexpectedResponse`] from a raw body, truncating long payloads.
	pub(crate) fn unexpected_response(meta: &ResponseMetadata, body: &[u8]) -> Self {
		let text = String::from_utf8_lossy(body);
		let trimmed = text.trim();
		let body_preview = match trimmed.char_indices().nth(BODY_PREVIEW_LIMIT) {
			Some((idx, _)) => format!("{}...", &trimmed[..idx]),
			None => trimmed.to_owned(),
		};

		Self::UnexpectedResponse { status: meta.status, retry_after: meta.retry_after, body_preview }
	}

	/// Returns the server-reported error, if this failure came from one.
	pub fn as_auth(&self) -> Option<&AuthError> {
		match self {
			Self::Auth(err) => Some(err),
			_ => None,
		}
	}
}

/// Application-level failure reported by the authentication server.
///
/// The rendered message follows the server's convention of `"<error><errorCause>: <errorMessage>"`.
/// An absent `errorCause` renders as an empty string, so a missing cause yields
/// `"ForbiddenOperationException: Invalid credentials."`.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("{error}{}: {error_message}", .error_cause.as_deref().unwrap_or_default())]
pub struct AuthError {
	/// HTTP status code the error arrived with.
	pub status: u16,
	/// Retry-After hint from the server, if supplied.
	pub retry_after: Option<Duration>,
	/// Error category, e.g. `ForbiddenOperationException`.
	pub error: String,
	/// Human-readable description.
	pub error_message: String,
	/// Optional cause, e.g. `UserMigratedException`.
	pub error_cause: Option<String>,
}
impl AuthError {
	/// Wraps a parsed server error body.
	pub fn from_response(meta: &ResponseMetadata, body: ResponseError) -> Self {
		Self {
			status: meta.status,
			retry_after: meta.retry_after,
			error: body.error,
			error_message: body.error_message,
			error_cause: body.error_cause,
		}
	}
}

/// Configuration and validation failures raised before any request is sent.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Request payload could not be serialized.
	#[error("Request payload could not be serialized.")]
	Serialize(#[from] serde_json::Error),
	/// Base URL could not be parsed or joined.
	#[error("Authentication server URL is invalid.")]
	InvalidUrl(#[from] url::ParseError),
	/// Base URL violates the server descriptor rules.
	#[error(transparent)]
	Server(#[from] crate::server::AuthServerError),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the authentication server.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the authentication server.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn auth_error(cause: Option<&str>) -> AuthError {
		AuthError {
			status: 403,
			retry_after: None,
			error: "ForbiddenOperationException".into(),
			error_message: "Invalid credentials.".into(),
			error_cause: cause.map(Into::into),
		}
	}

	#[test]
	fn auth_error_renders_missing_cause_as_empty() {
		assert_eq!(auth_error(None).to_string(), "ForbiddenOperationException: Invalid credentials.");
	}

	#[test]
	fn auth_error_concatenates_cause() {
		assert_eq!(
			auth_error(Some("UserMigratedException")).to_string(),
			"ForbiddenOperationExceptionUserMigratedException: Invalid credentials."
		);
	}

	#[test]
	fn unexpected_response_truncates_preview() {
		let body = "x".repeat(BODY_PREVIEW_LIMIT + 10);
		let meta = ResponseMetadata { status: 502, retry_after: Some(Duration::seconds(5)) };
		let Error::UnexpectedResponse { status, retry_after, body_preview } =
			Error::unexpected_response(&meta, body.as_bytes())
		else {
			panic!("Expected an unexpected-response error.");
		};

		assert_eq!(status, 502);
		assert_eq!(retry_after, Some(Duration::seconds(5)));
		assert_eq!(body_preview.len(), BODY_PREVIEW_LIMIT + 3);
		assert!(body_preview.ends_with("..."));
	}
}
