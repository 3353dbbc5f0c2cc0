//! Record store wire types.

use hollixton_core::{Account, Bag, Customer, Email};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize};

/// A user record as stored at `/users/{id}`.
///
/// The password is plaintext in the store and compared client-side; it is
/// wrapped in a [`SecretString`] so it never reaches logs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: Email,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default = "empty_secret", deserialize_with = "secret")]
    pub password: SecretString,
    /// Absent or `null` for users who never saved a bag.
    #[serde(default)]
    pub bag: Option<Bag>,
}

impl UserRecord {
    /// Whether `candidate` equals the stored password.
    #[must_use]
    pub fn password_matches(&self, candidate: &SecretString) -> bool {
        self.password.expose_secret() == candidate.expose_secret()
    }

    /// Strip the password and split off the bag.
    #[must_use]
    pub fn into_account(self) -> Account {
        Account {
            customer: Customer {
                id: self.id,
                first_name: self.first_name,
                last_name: self.last_name,
            },
            bag: self.bag.unwrap_or_default(),
        }
    }
}

/// Body of `PATCH /users/{id}`.
#[derive(Debug, Serialize)]
pub struct BagPatch<'a> {
    pub bag: &'a Bag,
}

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

fn secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(SecretString::from(raw.unwrap_or_default()))
}
