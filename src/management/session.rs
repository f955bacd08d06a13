use chrono::Utc;

use crate::{
    management::{RefreshExchange, SessionField, SessionStore, StoredSession},
    types::CallbackParams,
    warning,
};

/// Literal string a broken writer can leave behind in storage. Treated
/// the same as an absent token everywhere.
pub const PLACEHOLDER_TOKEN: &str = "undefined";

/// Minimum age of the last issuance before another refresh is attempted.
/// A token that needs refreshing sooner than this points at a refresh
/// endpoint handing out unusable tokens, and retrying would loop forever.
const REFRESH_LOOP_WINDOW_SECS: i64 = 1000;

/// Whether the stored access token has outlived its expiry window.
///
/// Evaluates only when both the access token and the acquisition
/// timestamp are present; any other state counts as not-expired. An
/// unparsable timestamp counts as absent, and a missing or unparsable
/// expiry duration evaluates as zero.
pub fn has_expired(session: &StoredSession) -> bool {
    let (Some(_), Some(issued_at)) = (&session.access_token, session.timestamp_millis()) else {
        return false;
    };

    let elapsed_millis = Utc::now().timestamp_millis() - issued_at;
    elapsed_millis as f64 / 1000.0 > session.expire_time_secs().unwrap_or(0.0)
}

/// Token lifecycle manager.
///
/// Produces a single usable access token (or a definitive none) per
/// invocation: reuse a stored still-valid token, ingest a freshly issued
/// one from login callback parameters, or exchange the stored refresh
/// token for a new access token via the auth backend. Nothing in here
/// returns an error to the caller; every failure path ends in a sentinel,
/// a log line, or a logout.
pub struct SessionManager<S, R> {
    store: S,
    exchange: R,
}

impl<S: SessionStore, R: RefreshExchange> SessionManager<S, R> {
    pub fn new(store: S, exchange: R) -> Self {
        SessionManager { store, exchange }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolves the access token for this invocation.
    ///
    /// A refresh is attempted first when the callback carried an error,
    /// the stored token has expired, or storage holds the placeholder
    /// value. Afterwards a single resolution pass runs over freshly read
    /// storage, so a successful refresh is picked up without any reload
    /// semantics.
    pub async fn establish(&mut self, params: &CallbackParams) -> Option<String> {
        let session = self.store.read().await;

        let placeholder = session.access_token.as_deref() == Some(PLACEHOLDER_TOKEN);
        if params.error.is_some() || has_expired(&session) || placeholder {
            self.refresh(&session).await;
        }

        self.resolve(params).await
    }

    /// One resolution pass, first match wins: stored usable token,
    /// then callback-parameter token, then none.
    async fn resolve(&mut self, params: &CallbackParams) -> Option<String> {
        let session = self.store.read().await;

        if let Some(token) = session.access_token {
            if token != PLACEHOLDER_TOKEN {
                return Some(token);
            }
        }

        // Token in the callback params means a first login; persist the
        // whole grant before handing the token out.
        if let Some(token) = &params.access_token {
            self.persist_grant(params).await;
            return Some(token.clone());
        }

        None
    }

    async fn persist_grant(&mut self, params: &CallbackParams) {
        if let Some(token) = &params.access_token {
            let _ = self.store.write(SessionField::AccessToken, token).await;
        }
        if let Some(refresh) = &params.refresh_token {
            let _ = self.store.write(SessionField::RefreshToken, refresh).await;
        }
        if let Some(expires_in) = &params.expires_in {
            let _ = self.store.write(SessionField::ExpireTime, expires_in).await;
        }
        let _ = self
            .store
            .write(
                SessionField::Timestamp,
                &Utc::now().timestamp_millis().to_string(),
            )
            .await;
    }

    /// Exchanges the stored refresh token for a new access token,
    /// overwriting only the access token and the acquisition timestamp.
    ///
    /// Logs out instead when no usable refresh token is stored or when the
    /// previous issuance is recent enough to indicate a refresh loop. An
    /// exchange failure is logged and swallowed; storage keeps whatever
    /// state it had before the attempt.
    async fn refresh(&mut self, session: &StoredSession) {
        let refresh_token = match session.refresh_token.as_deref() {
            Some(token) if token != PLACEHOLDER_TOKEN => token.to_string(),
            _ => {
                warning!("No refresh token available; logging out.");
                self.logout().await;
                return;
            }
        };

        if let Some(issued_at) = session.timestamp_millis() {
            let elapsed_secs = (Utc::now().timestamp_millis() - issued_at) / 1000;
            if elapsed_secs < REFRESH_LOOP_WINDOW_SECS {
                warning!(
                    "Token issued {}s ago is already unusable; logging out.",
                    elapsed_secs
                );
                self.logout().await;
                return;
            }
        }

        match self.exchange.exchange(&refresh_token).await {
            Ok(access_token) => {
                let _ = self
                    .store
                    .write(SessionField::AccessToken, &access_token)
                    .await;
                let _ = self
                    .store
                    .write(
                        SessionField::Timestamp,
                        &Utc::now().timestamp_millis().to_string(),
                    )
                    .await;
            }
            Err(e) => {
                warning!("Token refresh failed: {}", e);
            }
        }
    }

    /// Drops every persisted session field.
    pub async fn logout(&mut self) {
        if let Err(e) = self.store.clear().await {
            warning!("Failed to clear session store: {:?}", e);
        }
    }
}
