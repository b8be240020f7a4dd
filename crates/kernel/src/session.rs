//! Session management.
//!
//! Sessions carry only CSRF tokens and one-time flash messages, so they live
//! in process memory; submissions themselves never depend on session state.

use tower_sessions::cookie::SameSite;
use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

/// Default session expiry (24 hours).
pub const DEFAULT_SESSION_EXPIRY_HOURS: i64 = 24;

/// Parse a `COOKIE_SAME_SITE` value, defaulting to `Strict`.
pub fn parse_same_site(value: &str) -> SameSite {
    match value {
        "lax" => SameSite::Lax,
        "none" => SameSite::None,
        _ => SameSite::Strict,
    }
}

/// Create the session layer backed by an in-memory store.
pub fn create_session_layer(same_site: SameSite, secure: bool) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(secure)
        .with_http_only(true)
        .with_same_site(same_site)
        .with_expiry(Expiry::OnInactivity(Duration::hours(
            DEFAULT_SESSION_EXPIRY_HOURS,
        )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_same_site() {
        assert_eq!(parse_same_site("lax"), SameSite::Lax);
        assert_eq!(parse_same_site("none"), SameSite::None);
        assert_eq!(parse_same_site("strict"), SameSite::Strict);
        assert_eq!(parse_same_site("bogus"), SameSite::Strict);
    }
}
