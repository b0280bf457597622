use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use super::claims::Claims;
use super::verifier::VerifyOutcome;
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// Mint an access token for `subject_id`, valid for `security.token_ttl`.
pub fn mint_access_token(
    subject_id: i64,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("system clock is before the unix epoch"))?
        .as_secs() as i64;
    let exp = iat + security.token_ttl.as_secs() as i64;

    let claims = Claims {
        subject_id,
        iat,
        exp,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("failed to encode JWT: {e}")))
}

/// Decode and check `token`.
///
/// The algorithm is pinned to the configured one and `exp` is enforced.
/// Anything that is neither an expiry nor a signature problem is `Malformed`.
pub fn verify_access_token(token: &str, security: &SecurityConfig) -> VerifyOutcome {
    let validation = Validation::new(security.algorithm);

    match decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    ) {
        Ok(data) => VerifyOutcome::Valid(data.claims.subject_id),
        Err(e) => match e.kind() {
            ErrorKind::ExpiredSignature => VerifyOutcome::Expired,
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                VerifyOutcome::InvalidSignature
            }
            _ => VerifyOutcome::Malformed,
        },
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    use super::*;

    fn security(secret: &str) -> SecurityConfig {
        SecurityConfig::new(secret.as_bytes())
    }

    #[test]
    fn minted_token_verifies_to_its_subject() {
        let sec = security("jwt-test-secret");
        let now = SystemTime::now();
        let token = mint_access_token(42, now, &sec).unwrap();

        assert_eq!(verify_access_token(&token, &sec), VerifyOutcome::Valid(42));
    }

    #[test]
    fn ttl_comes_from_config() {
        let sec = security("jwt-test-secret").with_token_ttl(Duration::from_secs(90));
        let now = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let token = mint_access_token(1, now, &sec).unwrap();

        let mut validation = Validation::new(sec.algorithm);
        validation.validate_exp = false;
        let claims = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(&sec.jwt_secret),
            &validation,
        )
        .unwrap()
        .claims;
        assert_eq!(claims.iat, 1_700_000_000);
        assert_eq!(claims.exp, 1_700_000_090);
    }

    #[test]
    fn expired_token() {
        let sec = security("jwt-test-secret");
        let two_hours_ago = SystemTime::now() - Duration::from_secs(2 * 60 * 60);
        let token = mint_access_token(5, two_hours_ago, &sec).unwrap();

        assert_eq!(verify_access_token(&token, &sec), VerifyOutcome::Expired);
    }

    #[test]
    fn wrong_secret_is_invalid_signature() {
        let token = mint_access_token(5, SystemTime::now(), &security("secret-A")).unwrap();
        assert_eq!(
            verify_access_token(&token, &security("secret-B")),
            VerifyOutcome::InvalidSignature
        );
    }

    #[test]
    fn garbage_is_malformed() {
        let sec = security("jwt-test-secret");
        for token in ["", "abc", "a.b", "a.b.c", "not a token at all"] {
            assert_eq!(
                verify_access_token(token, &sec),
                VerifyOutcome::Malformed,
                "{token:?}"
            );
        }
    }

    #[test]
    fn signed_payload_without_id_is_malformed() {
        let sec = security("jwt-test-secret");
        let exp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
            + 600;
        let token = encode(
            &Header::new(sec.algorithm),
            &json!({ "sub": "someone", "exp": exp, "iat": 0 }),
            &EncodingKey::from_secret(&sec.jwt_secret),
        )
        .unwrap();

        assert_eq!(verify_access_token(&token, &sec), VerifyOutcome::Malformed);
    }
}
