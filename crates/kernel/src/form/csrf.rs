//! CSRF token generation and verification.

use anyhow::{Context, Result};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tower_sessions::Session;

/// Session key for storing CSRF tokens.
const CSRF_SESSION_KEY: &str = "csrf_tokens";

/// Maximum number of tokens to store per session.
const MAX_TOKENS: usize = 10;

/// Token validity period in seconds (1 hour).
const TOKEN_VALIDITY_SECS: i64 = 3600;

/// Form field carrying the token.
pub const CSRF_FIELD: &str = "_token";

/// A token issued to this session and not yet used.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct IssuedToken {
    token: String,
    issued_at: i64,
}

impl IssuedToken {
    fn is_fresh(&self, now: i64) -> bool {
        now - self.issued_at <= TOKEN_VALIDITY_SECS
    }

    fn matches(&self, submitted: &str) -> bool {
        self.token.as_bytes().ct_eq(submitted.as_bytes()).into()
    }
}

async fn load_tokens(session: &Session) -> Vec<IssuedToken> {
    session
        .get(CSRF_SESSION_KEY)
        .await
        .unwrap_or(None)
        .unwrap_or_default()
}

async fn store_tokens(session: &Session, tokens: &[IssuedToken]) -> Result<()> {
    session
        .insert(CSRF_SESSION_KEY, tokens)
        .await
        .context("failed to store CSRF tokens")
}

/// Generate a CSRF token and store it in the session.
pub async fn generate_csrf_token(session: &Session) -> Result<String> {
    let mut random_bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut random_bytes);

    let issued_at = chrono::Utc::now().timestamp();

    let mut hasher = Sha256::new();
    hasher.update(random_bytes);
    hasher.update(issued_at.to_le_bytes());
    let token = hex::encode(hasher.finalize());

    let mut tokens = load_tokens(session).await;
    tokens.push(IssuedToken {
        token: token.clone(),
        issued_at,
    });

    // Keep only the MAX_TOKENS most recent.
    if tokens.len() > MAX_TOKENS {
        let skip = tokens.len() - MAX_TOKENS;
        tokens.drain(..skip);
    }

    store_tokens(session, &tokens).await?;

    Ok(token)
}

/// Verify a CSRF token against the session.
///
/// Tokens are single-use and time-limited. An empty or unknown token
/// verifies as `false`; only session storage failures are errors.
pub async fn verify_csrf_token(session: &Session, submitted: &str) -> Result<bool> {
    if submitted.is_empty() {
        return Ok(false);
    }

    let mut tokens = load_tokens(session).await;
    if tokens.is_empty() {
        return Ok(false);
    }

    let now = chrono::Utc::now().timestamp();
    let found = tokens
        .iter()
        .position(|t| t.matches(submitted) && t.is_fresh(now));

    let Some(index) = found else {
        return Ok(false);
    };

    tokens.remove(index);
    tokens.retain(|t| t.is_fresh(now));
    store_tokens(session, &tokens).await?;

    Ok(true)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_token_is_hex_sha256() {
        let session = session();
        let token = generate_csrf_token(&session).await.unwrap();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn test_token_is_single_use() {
        let session = session();
        let token = generate_csrf_token(&session).await.unwrap();

        assert!(verify_csrf_token(&session, &token).await.unwrap());
        assert!(!verify_csrf_token(&session, &token).await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_and_empty_tokens_fail() {
        let session = session();
        assert!(!verify_csrf_token(&session, "abc").await.unwrap());

        generate_csrf_token(&session).await.unwrap();
        assert!(!verify_csrf_token(&session, "").await.unwrap());
        assert!(!verify_csrf_token(&session, "abc").await.unwrap());
    }

    #[tokio::test]
    async fn test_oldest_tokens_are_pruned() {
        let session = session();
        let first = generate_csrf_token(&session).await.unwrap();
        for _ in 0..MAX_TOKENS {
            generate_csrf_token(&session).await.unwrap();
        }

        assert_eq!(load_tokens(&session).await.len(), MAX_TOKENS);
        assert!(!verify_csrf_token(&session, &first).await.unwrap());
    }

    #[tokio::test]
    async fn test_expired_token_is_rejected() {
        let session = session();
        let stale = IssuedToken {
            token: "stale".to_string(),
            issued_at: chrono::Utc::now().timestamp() - TOKEN_VALIDITY_SECS - 1,
        };
        store_tokens(&session, &[stale]).await.unwrap();

        assert!(!verify_csrf_token(&session, "stale").await.unwrap());
    }
}
