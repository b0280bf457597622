//! Redaction for values that may carry personal data or credentials.

use std::fmt;

use lazy_regex::regex;
use regex::Captures;

/// Mask emails and bearer-token-shaped runs in `input`.
///
/// Emails keep the first character of the local part and the full domain.
/// JWT-shaped strings (three dot-separated base64url segments) are replaced
/// wholesale.
pub fn redact(input: &str) -> String {
    let emails = regex!(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").replace_all(
        input,
        |caps: &Captures| {
            let full = &caps[0];
            match full.split_once('@') {
                Some((local, domain)) if !local.is_empty() => {
                    format!("{}***@{domain}", &local[..1])
                }
                _ => full.to_string(),
            }
        },
    );

    regex!(r"\b[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\b")
        .replace_all(&emails, "[REDACTED_TOKEN]")
        .into_owned()
}

/// Display wrapper that redacts on format, for use in log fields.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emails_keep_first_char_and_domain() {
        assert_eq!(redact("ada@example.com"), "a***@example.com");
        assert_eq!(
            redact("from a@x.org to bob@sub.example.com"),
            "from a***@x.org to b***@sub.example.com"
        );
    }

    #[test]
    fn jwt_shaped_tokens_are_masked() {
        let token = "eyJhbGciOiJIUzI1NiJ9.eyJpZCI6NDJ9.c2lnbmF0dXJlLWJ5dGVz";
        assert_eq!(redact(&format!("Bearer {token}")), "Bearer [REDACTED_TOKEN]");
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(redact("UNIQUE constraint failed"), "UNIQUE constraint failed");
    }

    #[test]
    fn wrapper_redacts_when_formatted() {
        assert_eq!(format!("{}", Redacted("x@y.io")), "x***@y.io");
        assert_eq!(format!("{:?}", Redacted("x@y.io")), "x***@y.io");
    }
}
