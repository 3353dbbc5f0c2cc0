//! Signed-in customer type.

use serde::{Deserialize, Serialize};

use super::bag::Bag;
use super::email::Email;

/// The signed-in shopper as kept in application state.
///
/// Built from a record store user record with the bag and password
/// stripped: the bag lives in its own state field and the password is only
/// needed while authenticating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Record id; the customer's email.
    pub id: Email,
    pub first_name: String,
    pub last_name: String,
}

/// A customer together with the bag stored on their record.
///
/// This is what a successful sign-in or session restore yields; the state
/// mutator splits it into the customer and bag fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub customer: Customer,
    pub bag: Bag,
}
