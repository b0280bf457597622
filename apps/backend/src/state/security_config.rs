use std::time::Duration;

use argon2::Params;
use jsonwebtoken::Algorithm;

/// Token signing and password hashing settings. Loaded once at startup and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// HMAC secret for signing and verifying access tokens
    pub jwt_secret: Vec<u8>,
    /// Defaults to HS256
    pub algorithm: Algorithm,
    /// Validity window of minted tokens
    pub token_ttl: Duration,
    /// Argon2 cost parameters for new password hashes
    pub password_params: Params,
}

impl SecurityConfig {
    pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(60 * 60);

    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            token_ttl: Self::DEFAULT_TOKEN_TTL,
            password_params: Params::default(),
        }
    }

    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Minimum Argon2 cost so suites that register many users stay fast.
    pub fn with_cheap_hashing(mut self) -> Self {
        self.password_params = Params::new(
            Params::MIN_M_COST,
            Params::MIN_T_COST,
            Params::MIN_P_COST,
            None,
        )
        .unwrap_or_default();
        self
    }
}
