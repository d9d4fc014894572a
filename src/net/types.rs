//! Wire-protocol DTOs for the backend API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads. Decoding is deliberately
//! tolerant where the backend is known to be loose: `status` arrives as
//! either an integer or an integral float depending on the producing stack,
//! and `notes` may be omitted or an explicit `null` when empty.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// One tracked job application, as returned by `/applications`.
///
/// The server owns the full lifecycle; the client only reads a snapshot per
/// page load. List order is significant and must be preserved through to
/// rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Employer label.
    pub company: String,
    /// Position label.
    pub role: String,
    /// Workflow status code. Semantics are owned by the backend; the client
    /// treats it as opaque.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub status: i64,
    /// Free-text notes, in insertion order. Absent or `null` means none.
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub notes: Vec<String>,
    /// Owning user account.
    pub username: String,
}

/// Login form fields for a single submission.
///
/// Exists only between form submit and response handling; never stored in
/// signals or browser storage.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}

fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
