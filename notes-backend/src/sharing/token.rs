//! Share token generation

use uuid::Uuid;

/// 32 lowercase hex characters backed by a random (v4) UUID, which draws
/// 122 bits from the OS CSPRNG.
pub fn generate_share_token() -> String {
    Uuid::new_v4().simple().to_string()
}
