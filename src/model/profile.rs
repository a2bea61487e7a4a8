//! Profile and user account records.

// self
use crate::_prelude::*;

/// Game profile as returned by `/authenticate`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
	/// Agent label, normally `minecraft`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub agent: Option<String>,
	/// Profile identifier (undashed UUID).
	pub id: String,
	/// Player name.
	pub name: String,
	/// Owning account identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user_id: Option<String>,
	/// Creation instant in epoch milliseconds.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub created_at: Option<i64>,
	/// Whether the profile predates account migration.
	pub legacy_profile: bool,
	/// Whether the profile is suspended.
	pub suspended: bool,
	/// Whether the game was purchased for this profile.
	pub paid: bool,
	/// Whether the profile was migrated to a Mojang account.
	pub migrated: bool,
	/// Whether the profile is a legacy profile.
	pub legacy: bool,
}
impl Profile {
	/// Returns the creation instant, if the server reported one in range.
	pub fn created_at(&self) -> Option<OffsetDateTime> {
		self.created_at.and_then(millis_to_datetime)
	}

	/// Returns the identifier/name pair of this profile.
	pub fn summary(&self) -> ProfileSummary {
		ProfileSummary { id: self.id.clone(), name: self.name.clone() }
	}
}

/// Identifier/name pair used by `/refresh` requests and responses.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileSummary {
	/// Profile identifier (undashed UUID).
	pub id: String,
	/// Player name.
	pub name: String,
}

/// Name/value account property, e.g. `preferredLanguage`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProperty {
	/// Property name.
	pub name: String,
	/// Property value.
	pub value: String,
}

/// Account metadata returned by `/authenticate` when the user block is requested.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
	/// Account identifier.
	pub id: String,
	/// Account e-mail address.
	pub email: Option<String>,
	/// Login name (an e-mail for migrated accounts).
	pub username: Option<String>,
	/// Partially masked registration address.
	pub register_ip: Option<String>,
	/// Origin of a migrated account, e.g. `minecraft.net`.
	pub migrated_from: Option<String>,
	/// Migration instant in epoch milliseconds.
	pub migrated_at: Option<i64>,
	/// Registration instant in epoch milliseconds.
	pub registered_at: Option<i64>,
	/// Last password change in epoch milliseconds.
	pub password_changed_at: Option<i64>,
	/// Date of birth in epoch milliseconds.
	pub date_of_birth: Option<i64>,
	/// Whether the account is suspended.
	pub suspended: bool,
	/// Whether the account is blocked.
	pub blocked: bool,
	/// Whether security questions are configured.
	pub secured: bool,
	/// Whether the account was migrated.
	pub migrated: bool,
	/// Whether the e-mail address is verified.
	pub email_verified: bool,
	/// Whether this is a legacy (pre-migration) user.
	pub legacy_user: bool,
	/// Whether a parent verified the account.
	pub verified_by_parent: bool,
	/// Account properties in server order.
	pub properties: Vec<UserProperty>,
}
impl User {
	/// Looks up a property value by name.
	pub fn property(&self, name: &str) -> Option<&str> {
		find_property(&self.properties, name)
	}

	/// Returns the registration instant, if present.
	pub fn registered_at(&self) -> Option<OffsetDateTime> {
		self.registered_at.and_then(millis_to_datetime)
	}
}

/// Reduced user block returned by `/refresh`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSummary {
	/// Account identifier.
	pub id: String,
	/// Account properties in server order.
	pub properties: Vec<UserProperty>,
}
impl UserSummary {
	/// Looks up a property value by name.
	pub fn property(&self, name: &str) -> Option<&str> {
		find_property(&self.properties, name)
	}
}

fn find_property<'a>(properties: &'a [UserProperty], name: &str) -> Option<&'a str> {
	properties.iter().find(|property| property.name == name).map(|property| property.value.as_str())
}

fn millis_to_datetime(millis: i64) -> Option<OffsetDateTime> {
	OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).ok()
}
