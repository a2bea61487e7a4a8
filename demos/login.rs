//! Demonstrates logging in and refreshing a session against a mock authentication server
//! with the default reqwest transport.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use url::Url;
// self
use mojang_auth::{
	client::AuthClient, http::ReqwestHttpClient, reqwest::Client, server::AuthServer,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let login_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/authenticate");
			then.status(200).header("content-type", "application/json").body(
				"{\"accessToken\":\"demo-access\",\"clientToken\":\"demo-client\",\"availableProfiles\":[{\"id\":\"p1\",\"name\":\"Steve\"}],\"selectedProfile\":{\"id\":\"p1\",\"name\":\"Steve\"}}",
			);
		})
		.await;
	let refresh_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/refresh");
			then.status(200).header("content-type", "application/json").body(
				"{\"accessToken\":\"demo-access-2\",\"clientToken\":\"demo-client\",\"selectedProfile\":{\"id\":\"p1\",\"name\":\"Steve\"}}",
			);
		})
		.await;
	let http_client = ReqwestHttpClient::with_client(
		Client::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.redirect(mojang_auth::reqwest::redirect::Policy::none())
			.build()?,
	);
	let auth_server =
		AuthServer::builder(Url::parse(&server.url("/"))?).allow_insecure_http().build()?;
	let client = AuthClient::builder()
		.server(auth_server)
		.http_client(http_client)
		.client_token("demo-client")
		.build()?;
	let login = client.login("steve@example.com", "hunter2").await?;

	println!(
		"Logged in as {} ({} profiles).",
		login.selected_profile.as_ref().map(|profile| profile.name.as_str()).unwrap_or("-"),
		login.available_profiles.len()
	);

	client.refresh().await?;

	println!("Session after refresh: {:?}.", client.session());

	login_mock.assert_async().await;
	refresh_mock.assert_async().await;

	Ok(())
}
