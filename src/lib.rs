//! Async client for the Mojang (Yggdrasil) authentication service: typed login and refresh
//! calls over HTTPS with redacted, exclusively owned session state.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod client;
pub mod error;
pub mod http;
pub mod model;
pub mod obs;
pub mod server;
pub mod session;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// crates.io
	use reqwest::redirect::Policy;
	// self
	use crate::{
		client::{AuthClient, ReqwestAuthClient},
		http::ReqwestHttpClient,
		server::AuthServer,
	};

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests. Redirects stay disabled, matching the production transport.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.redirect(Policy::none())
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Describes a mock server by its base URL; either scheme is accepted.
	pub fn test_auth_server(base_url: &str) -> AuthServer {
		AuthServer::builder(Url::parse(base_url).expect("Mock server URL should parse."))
			.allow_insecure_http()
			.build()
			.expect("Mock server descriptor should build.")
	}

	/// Constructs a reqwest-backed [`AuthClient`] pointed at a mock server.
	pub fn build_reqwest_test_client(base_url: &str, client_token: &str) -> ReqwestAuthClient {
		AuthClient::with_http_client(test_auth_server(base_url), test_reqwest_http_client())
			.with_client_token(client_token)
	}
}

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
