// ============================================================================
// CRYSTALPAY - Request Signatures
// ============================================================================
// Sensitive operations prove knowledge of SECRET2 by sending
// md5(field1@field2@...@secret2) as the `secret` parameter. The gateway
// recomputes the digest, so the algorithm and field order are fixed.
// ============================================================================

use md5::{Digest, Md5};
use std::fmt::Display;

/// Field separator inside the signed string
pub const SEPARATOR: &str = "@";

/// Join `fields` with `@` and return the lowercase hex MD5 of the result.
pub fn create_secret_hash(fields: &[&dyn Display]) -> String {
    let joined = fields
        .iter()
        .map(|field| field.to_string())
        .collect::<Vec<_>>()
        .join(SEPARATOR);

    hex::encode(Md5::digest(joined.as_bytes()))
}
