//! Wire types shared between the REST adapters and the state layer.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

/// An authenticated user as reported by the identity provider.
///
/// The provider owns this identity; only `uid` is interpreted locally
/// (it keys the `users/{uid}` admin-flag document).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

/// A song the UI is currently bidding on. Held in memory only.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub current_bid: f64,
}

/// A Firestore REST document: a named bag of typed field values.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FsDocument {
    #[serde(default)]
    pub fields: BTreeMap<String, FsValue>,
}

/// A single Firestore field value.
///
/// The REST encoding wraps each value in a one-key object such as
/// `{"booleanValue": true}`. Integers arrive as decimal strings. Value
/// kinds this client never reads (timestamps, maps, arrays) decode to an
/// empty `FsValue` and read back as `None`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FsValue {
    #[serde(rename = "booleanValue", default, skip_serializing_if = "Option::is_none")]
    pub boolean_value: Option<bool>,
    #[serde(rename = "integerValue", default, skip_serializing_if = "Option::is_none")]
    pub integer_value: Option<String>,
    #[serde(rename = "doubleValue", default, skip_serializing_if = "Option::is_none")]
    pub double_value: Option<f64>,
    #[serde(rename = "stringValue", default, skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
}

impl FsDocument {
    /// Read a boolean field. Non-boolean values are `None`, not coerced.
    pub fn bool_field(&self, name: &str) -> Option<bool> {
        self.fields.get(name)?.boolean_value
    }

    /// Read a numeric field, accepting either `doubleValue` or a parseable
    /// `integerValue` string.
    pub fn number_field(&self, name: &str) -> Option<f64> {
        let value = self.fields.get(name)?;
        if let Some(d) = value.double_value {
            return Some(d);
        }
        value.integer_value.as_ref()?.parse::<i64>().ok().map(|i| i as f64)
    }

    /// Read a string field.
    pub fn string_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name)?.string_value.as_deref()
    }
}

/// Response body of `accounts:signInWithPassword`.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct SignInSession {
    #[serde(rename = "localId")]
    pub local_id: String,
    #[serde(rename = "idToken")]
    pub id_token: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
}

/// Response body of `accounts:lookup`.
#[derive(Debug, serde::Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub users: Vec<LookupUser>,
}

/// One account entry inside a [`LookupResponse`].
#[derive(Debug, serde::Deserialize)]
pub struct LookupUser {
    #[serde(rename = "localId")]
    pub local_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
}

impl From<LookupUser> for User {
    fn from(entry: LookupUser) -> Self {
        Self {
            uid: entry.local_id,
            email: entry.email,
            display_name: entry.display_name,
        }
    }
}
