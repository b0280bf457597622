//! Credential verification seam used by the auth gate.

use async_trait::async_trait;

use super::jwt::verify_access_token;
use crate::state::security_config::SecurityConfig;

/// Result of checking a bearer credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    Valid(i64),
    InvalidSignature,
    Expired,
    Malformed,
}

/// Checks a bearer credential and yields the subject it was issued for.
///
/// The outcome is delivered by completing the returned future; callers must
/// await it before deciding whether the request may proceed.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> VerifyOutcome;
}

/// HS256 JWT verifier holding the process-wide signing secret.
#[derive(Debug, Clone)]
pub struct JwtVerifier {
    security: SecurityConfig,
}

impl JwtVerifier {
    pub fn new(security: SecurityConfig) -> Self {
        Self { security }
    }
}

#[async_trait]
impl CredentialVerifier for JwtVerifier {
    async fn verify(&self, token: &str) -> VerifyOutcome {
        verify_access_token(token, &self.security)
    }
}
