use std::collections::HashMap;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use chrono::Utc;
use sprofcli::management::{
    PLACEHOLDER_TOKEN, RefreshExchange, SessionField, SessionManager, SessionStore, StoreError,
    StoredSession, has_expired,
};
use sprofcli::types::CallbackParams;

/// In-memory stand-in for the persistent session store.
#[derive(Default)]
struct MemoryStore {
    values: HashMap<&'static str, String>,
}

impl MemoryStore {
    fn get(&self, field: SessionField) -> Option<String> {
        self.values.get(field.key()).cloned()
    }

    fn set(&mut self, field: SessionField, value: &str) {
        self.values.insert(field.key(), value.to_string());
    }
}

impl SessionStore for MemoryStore {
    async fn read(&self) -> StoredSession {
        StoredSession {
            access_token: self.get(SessionField::AccessToken),
            refresh_token: self.get(SessionField::RefreshToken),
            expire_time: self.get(SessionField::ExpireTime),
            timestamp: self.get(SessionField::Timestamp),
        }
    }

    async fn write(&mut self, field: SessionField, value: &str) -> Result<(), StoreError> {
        self.set(field, value);
        Ok(())
    }

    async fn clear(&mut self) -> Result<(), StoreError> {
        self.values.clear();
        Ok(())
    }
}

/// Canned refresh exchange that counts how often it gets called.
struct FakeExchange {
    result: Result<String, String>,
    calls: Arc<AtomicUsize>,
}

impl FakeExchange {
    fn ok(token: &str) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                result: Ok(token.to_string()),
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }

    fn err(message: &str) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                result: Err(message.to_string()),
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl RefreshExchange for FakeExchange {
    async fn exchange(&self, _refresh_token: &str) -> Result<String, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

// Helper to build a fully populated store
fn populated_store(access: &str, refresh: &str, expire_secs: &str, issued_at: i64) -> MemoryStore {
    let mut store = MemoryStore::default();
    store.set(SessionField::AccessToken, access);
    store.set(SessionField::RefreshToken, refresh);
    store.set(SessionField::ExpireTime, expire_secs);
    store.set(SessionField::Timestamp, &issued_at.to_string());
    store
}

#[tokio::test]
async fn valid_stored_token_is_returned_without_mutating_storage() {
    let issued_at = now_millis() - 1000;
    let store = populated_store("token-a", "refresh-a", "3600", issued_at);
    let (exchange, calls) = FakeExchange::err("must not be called");
    let mut manager = SessionManager::new(store, exchange);

    let token = manager.establish(&CallbackParams::default()).await;

    assert_eq!(token.as_deref(), Some("token-a"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let after = manager.store().read().await;
    assert_eq!(after.access_token.as_deref(), Some("token-a"));
    assert_eq!(after.refresh_token.as_deref(), Some("refresh-a"));
    assert_eq!(after.expire_time.as_deref(), Some("3600"));
    assert_eq!(after.timestamp.as_deref(), Some(issued_at.to_string().as_str()));
}

#[tokio::test]
async fn first_login_persists_callback_params() {
    let before = now_millis();
    let (exchange, calls) = FakeExchange::err("must not be called");
    let mut manager = SessionManager::new(MemoryStore::default(), exchange);

    let params = CallbackParams {
        access_token: Some("token-t".to_string()),
        refresh_token: Some("refresh-r".to_string()),
        expires_in: Some("3600".to_string()),
        error: None,
    };

    let token = manager.establish(&params).await;

    assert_eq!(token.as_deref(), Some("token-t"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let after = manager.store().read().await;
    assert_eq!(after.access_token.as_deref(), Some("token-t"));
    assert_eq!(after.refresh_token.as_deref(), Some("refresh-r"));
    assert_eq!(after.expire_time.as_deref(), Some("3600"));

    let issued_at = after.timestamp_millis().expect("timestamp must be set");
    assert!(issued_at >= before);
}

#[test]
fn expiry_predicate_boundaries() {
    let session = StoredSession {
        access_token: Some("t".to_string()),
        refresh_token: None,
        expire_time: Some("3600".to_string()),
        timestamp: Some((now_millis() - 3_600_001).to_string()),
    };
    assert!(has_expired(&session));

    let session = StoredSession {
        access_token: Some("t".to_string()),
        refresh_token: None,
        expire_time: Some("3600".to_string()),
        timestamp: Some((now_millis() - 3_599_000).to_string()),
    };
    assert!(!has_expired(&session));
}

#[test]
fn expiry_predicate_tolerates_missing_fields() {
    // No access token: never expired, regardless of timestamp
    let session = StoredSession {
        access_token: None,
        refresh_token: None,
        expire_time: Some("3600".to_string()),
        timestamp: Some("0".to_string()),
    };
    assert!(!has_expired(&session));

    // No timestamp: never expired
    let session = StoredSession {
        access_token: Some("t".to_string()),
        refresh_token: None,
        expire_time: Some("3600".to_string()),
        timestamp: None,
    };
    assert!(!has_expired(&session));

    // Unparsable timestamp counts as absent
    let session = StoredSession {
        access_token: Some("t".to_string()),
        refresh_token: None,
        expire_time: Some("3600".to_string()),
        timestamp: Some("not-a-number".to_string()),
    };
    assert!(!has_expired(&session));

    // Missing expiry duration evaluates as zero, so any elapsed time expires
    let session = StoredSession {
        access_token: Some("t".to_string()),
        refresh_token: None,
        expire_time: None,
        timestamp: Some((now_millis() - 5_000).to_string()),
    };
    assert!(has_expired(&session));
}

#[tokio::test]
async fn logout_clears_every_field() {
    let store = populated_store("token-a", "refresh-a", "3600", now_millis());
    let (exchange, _) = FakeExchange::err("unused");
    let mut manager = SessionManager::new(store, exchange);

    manager.logout().await;

    let after = manager.store().read().await;
    assert!(after.access_token.is_none());
    assert!(after.refresh_token.is_none());
    assert!(after.expire_time.is_none());
    assert!(after.timestamp.is_none());
}

#[tokio::test]
async fn successful_refresh_updates_only_token_and_timestamp() {
    let issued_at = now_millis() - 3_600_001;
    let store = populated_store("stale-token", "refresh-r", "3600", issued_at);
    let (exchange, calls) = FakeExchange::ok("fresh-token");
    let mut manager = SessionManager::new(store, exchange);

    let token = manager.establish(&CallbackParams::default()).await;

    assert_eq!(token.as_deref(), Some("fresh-token"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let after = manager.store().read().await;
    assert_eq!(after.access_token.as_deref(), Some("fresh-token"));
    assert_eq!(after.refresh_token.as_deref(), Some("refresh-r"));
    assert_eq!(after.expire_time.as_deref(), Some("3600"));

    let new_issued_at = after.timestamp_millis().expect("timestamp must be set");
    assert!(new_issued_at > issued_at);
}

#[tokio::test]
async fn failed_refresh_leaves_storage_untouched() {
    let issued_at = now_millis() - 3_600_001;
    let store = populated_store("stale-token", "refresh-r", "3600", issued_at);
    let (exchange, calls) = FakeExchange::err("backend unavailable");
    let mut manager = SessionManager::new(store, exchange);

    // No panic, no error: resolution falls back to the prior token state
    let token = manager.establish(&CallbackParams::default()).await;

    assert_eq!(token.as_deref(), Some("stale-token"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let after = manager.store().read().await;
    assert_eq!(after.access_token.as_deref(), Some("stale-token"));
    assert_eq!(after.refresh_token.as_deref(), Some("refresh-r"));
    assert_eq!(after.expire_time.as_deref(), Some("3600"));
    assert_eq!(after.timestamp.as_deref(), Some(issued_at.to_string().as_str()));
}

#[tokio::test]
async fn placeholder_token_triggers_refresh() {
    let issued_at = now_millis() - 2_000_000;
    let store = populated_store(PLACEHOLDER_TOKEN, "refresh-r", "3600", issued_at);
    let (exchange, calls) = FakeExchange::ok("fresh-token");
    let mut manager = SessionManager::new(store, exchange);

    let token = manager.establish(&CallbackParams::default()).await;

    assert_eq!(token.as_deref(), Some("fresh-token"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn placeholder_token_resolves_to_none_when_refresh_fails() {
    let issued_at = now_millis() - 2_000_000;
    let store = populated_store(PLACEHOLDER_TOKEN, "refresh-r", "3600", issued_at);
    let (exchange, calls) = FakeExchange::err("backend unavailable");
    let mut manager = SessionManager::new(store, exchange);

    let token = manager.establish(&CallbackParams::default()).await;

    assert_eq!(token, None);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn expired_session_without_refresh_token_logs_out() {
    let mut store = MemoryStore::default();
    store.set(SessionField::AccessToken, "stale-token");
    store.set(SessionField::ExpireTime, "3600");
    store.set(
        SessionField::Timestamp,
        &(now_millis() - 3_600_001).to_string(),
    );
    let (exchange, calls) = FakeExchange::ok("never-used");
    let mut manager = SessionManager::new(store, exchange);

    let token = manager.establish(&CallbackParams::default()).await;

    assert_eq!(token, None);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let after = manager.store().read().await;
    assert!(after.access_token.is_none());
    assert!(after.refresh_token.is_none());
    assert!(after.expire_time.is_none());
    assert!(after.timestamp.is_none());
}

#[tokio::test]
async fn recent_issuance_logs_out_instead_of_looping() {
    // The token was issued 500 seconds ago and is already unusable: a
    // refresh would only produce another unusable token, so the session
    // is dropped instead.
    let issued_at = now_millis() - 500_000;
    let store = populated_store(PLACEHOLDER_TOKEN, "refresh-r", "3600", issued_at);
    let (exchange, calls) = FakeExchange::ok("never-used");
    let mut manager = SessionManager::new(store, exchange);

    let token = manager.establish(&CallbackParams::default()).await;

    assert_eq!(token, None);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let after = manager.store().read().await;
    assert!(after.access_token.is_none());
    assert!(after.refresh_token.is_none());
}

#[tokio::test]
async fn callback_error_triggers_refresh() {
    let issued_at = now_millis() - 2_000_000;
    let store = populated_store("token-a", "refresh-r", "3600", issued_at);
    let (exchange, calls) = FakeExchange::ok("fresh-token");
    let mut manager = SessionManager::new(store, exchange);

    let params = CallbackParams {
        error: Some("access_denied".to_string()),
        ..CallbackParams::default()
    };

    let token = manager.establish(&params).await;

    assert_eq!(token.as_deref(), Some("fresh-token"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
