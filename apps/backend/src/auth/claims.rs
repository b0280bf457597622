use serde::{Deserialize, Serialize};

/// Payload of the access tokens minted at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (users.id). Serialized as `id`.
    #[serde(rename = "id")]
    pub subject_id: i64,
    /// Issued-at, seconds since epoch
    pub iat: i64,
    /// Expiry, seconds since epoch
    pub exp: i64,
}
