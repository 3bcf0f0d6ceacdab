//! Password hashing helpers
//!
//! bcrypt is CPU bound, so both directions run on the blocking pool.

use tokio::task;

/// Hash `password` with bcrypt at `cost`
pub async fn hash_password(password: &str, cost: u32) -> Result<String, String> {
    let password = password.to_string();
    task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| format!("Hashing task failed: {}", e))?
        .map_err(|e| format!("Failed to hash password: {}", e))
}

/// Check `password` against a bcrypt `hash`
///
/// Malformed hashes count as a mismatch.
pub async fn verify_password(password: &str, hash: &str) -> bool {
    let password = password.to_string();
    let hash = hash.to_string();
    task::spawn_blocking(move || bcrypt::verify(password, &hash).unwrap_or(false))
        .await
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hash = hash_password("newpass1", 4).await.unwrap();
        assert_ne!(hash, "newpass1");
        assert!(verify_password("newpass1", &hash).await);
        assert!(!verify_password("oldpass", &hash).await);
    }

    #[tokio::test]
    async fn test_malformed_hash_never_matches() {
        assert!(!verify_password("anything", "not-a-bcrypt-hash").await);
    }

    #[tokio::test]
    async fn test_invalid_cost_is_an_error() {
        assert!(hash_password("newpass1", 99).await.is_err());
    }
}
