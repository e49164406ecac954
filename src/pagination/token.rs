//! Continuation token generation

use uuid::Uuid;

/// Generate a fresh opaque continuation token.
///
/// Tokens are random UUIDs in hyphenated form. They carry no position
/// data, so possession of a token is the only capability needed to
/// continue its sequence. Uniqueness is probabilistic; the store checks
/// for collisions on insert rather than trusting it blindly.
pub fn generate_token() -> String {
    Uuid::new_v4().to_string()
}
