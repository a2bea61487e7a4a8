//! Wire model for the authentication server: request payloads, response records, and
//! profile/user metadata.
//!
//! Field names follow the server's camelCase JSON. Only the token pair and profile
//! identifiers are mandatory on responses; account metadata is parsed leniently so a server
//! omitting optional fields never fails the call.

pub mod profile;
pub mod request;
pub mod response;

pub use profile::*;
pub use request::*;
pub use response::*;
