//! Authentication server descriptor: validated base URL and endpoint helpers.
//!
//! [`AuthServer::mojang`] points at the public Mojang service. Yggdrasil-compatible servers
//! can be described with [`AuthServer::builder`]; plain HTTP is refused unless the builder
//! explicitly allows it, which is only meant for local development servers.

// self
use crate::{_prelude::*, error::ConfigError};

/// Base URL of the public Mojang authentication service.
pub const MOJANG_AUTH_SERVER: &str = "https://authserver.mojang.com/";

/// Endpoints exposed by the authentication server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
	/// `POST /authenticate`.
	Authenticate,
	/// `POST /refresh`.
	Refresh,
}
impl Endpoint {
	/// Path relative to the server base URL.
	pub const fn path(self) -> &'static str {
		match self {
			Endpoint::Authenticate => "authenticate",
			Endpoint::Refresh => "refresh",
		}
	}
}
impl Display for Endpoint {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "/{}", self.path())
	}
}

/// Errors raised while validating a server descriptor.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum AuthServerError {
	/// The base URL must use HTTPS.
	#[error("The authentication server must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// URL that failed validation.
		url: String,
	},
	/// Only HTTP(S) base URLs are supported.
	#[error("Unsupported URL scheme `{scheme}`.")]
	UnsupportedScheme {
		/// Scheme that was supplied.
		scheme: String,
	},
	/// Query strings and fragments would be lost when joining endpoint paths.
	#[error("The base URL must not carry a query or fragment: {url}.")]
	UnexpectedQuery {
		/// URL that failed validation.
		url: String,
	},
}

/// Validated authentication server descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthServer {
	base_url: Url,
}
impl AuthServer {
	/// Descriptor for the public Mojang authentication service.
	pub fn mojang() -> Self {
		// The constant is a valid absolute HTTPS URL with a trailing slash.
		match Url::parse(MOJANG_AUTH_SERVER) {
			Ok(base_url) => Self { base_url },
			Err(_) => unreachable!("MOJANG_AUTH_SERVER must parse"),
		}
	}

	/// Creates a builder for a custom server.
	pub fn builder(base_url: Url) -> AuthServerBuilder {
		AuthServerBuilder::new(base_url)
	}

	/// Parses and validates a custom HTTPS server URL.
	pub fn parse(base_url: &str) -> Result<Self> {
		let url = Url::parse(base_url).map_err(ConfigError::from)?;

		Ok(Self::builder(url).build().map_err(ConfigError::from)?)
	}

	/// Returns the normalized base URL (always ending with `/`).
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Resolves an endpoint against the base URL.
	pub fn endpoint(&self, endpoint: Endpoint) -> Result<Url> {
		Ok(self.base_url.join(endpoint.path()).map_err(ConfigError::from)?)
	}
}
impl Default for AuthServer {
	fn default() -> Self {
		Self::mojang()
	}
}

/// Builder for [`AuthServer`] values.
#[derive(Debug)]
pub struct AuthServerBuilder {
	/// Base URL being validated.
	pub base_url: Url,
	/// Accept `http://` base URLs.
	pub allow_insecure_http: bool,
}
impl AuthServerBuilder {
	/// Creates a new builder seeded with the provided base URL.
	pub fn new(base_url: Url) -> Self {
		Self { base_url, allow_insecure_http: false }
	}

	/// Accepts plain-HTTP base URLs, e.g. for a local development server.
	pub fn allow_insecure_http(mut self) -> Self {
		self.allow_insecure_http = true;

		self
	}

	/// Consumes the builder and validates the resulting descriptor.
	pub fn build(self) -> Result<AuthServer, AuthServerError> {
		let mut base_url = self.base_url;

		match base_url.scheme() {
			"https" => {},
			"http" if self.allow_insecure_http => {},
			"http" => return Err(AuthServerError::InsecureEndpoint { url: base_url.to_string() }),
			other => return Err(AuthServerError::UnsupportedScheme { scheme: other.to_owned() }),
		}

		if base_url.query().is_some() || base_url.fragment().is_some() {
			return Err(AuthServerError::UnexpectedQuery { url: base_url.to_string() });
		}
		if !base_url.path().ends_with('/') {
			let path = format!("{}/", base_url.path());

			base_url.set_path(&path);
		}

		Ok(AuthServer { base_url })
	}
}
