//! Provisioning URI construction in the Google Authenticator key-URI
//! format: `otpauth://totp/ISSUER:LABEL?secret=...&issuer=...&algorithm=...`.
//!
//! This is glue around the core: it only consumes the Base32 secret and
//! the hash algorithm's display name.

/// Builds an `otpauth://totp/` key URI suitable for QR display.
pub(crate) fn otpauth_url(issuer: &str, label: Option<&str>, algorithm: &str, secret: &str) -> String {
    let path = match label {
        Some(label) => format!("{}:{}", percent_encode(issuer), percent_encode(label)),
        None => percent_encode(issuer),
    };
    format!(
        "otpauth://totp/{path}?secret={secret}&issuer={}&algorithm={}&digits=6&period=30",
        percent_encode(issuer),
        algorithm.to_uppercase(),
    )
}

/// Percent-encodes everything outside the URI unreserved set.
fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(char::from(byte));
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
