use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Revocation list for tokens invalidated before their natural expiry
/// (logout and refresh).
///
/// Keyed store: `jti → expiry timestamp`. An entry only matters while the
/// token itself is still alive, so expired entries are purged lazily on
/// write. Shared by cloning; all clones see the same list.
#[derive(Clone, Debug, Default)]
pub struct TokenBlacklist {
    entries: Arc<RwLock<HashMap<String, i64>>>,
}

impl TokenBlacklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `jti` as revoked until `expires_at` (unix seconds).
    pub async fn insert(&self, jti: &str, expires_at: i64) {
        let mut entries = self.entries.write().await;
        let now = Utc::now().timestamp();
        entries.retain(|_, exp| *exp > now);
        entries.insert(jti.to_string(), expires_at);
    }

    /// Whether `jti` is currently revoked.
    pub async fn contains(&self, jti: &str) -> bool {
        let entries = self.entries.read().await;
        match entries.get(jti) {
            Some(exp) => *exp > Utc::now().timestamp(),
            None => false,
        }
    }
}
