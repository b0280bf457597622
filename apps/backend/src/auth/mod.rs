pub mod claims;
pub mod jwt;
pub mod password;
pub mod verifier;

pub use claims::Claims;
pub use jwt::{mint_access_token, verify_access_token};
pub use verifier::{CredentialVerifier, JwtVerifier, VerifyOutcome};
