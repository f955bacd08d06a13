use std::{io::ErrorKind, path::PathBuf};

#[derive(Debug)]
pub enum StoreError {
    IoError(std::io::Error),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::IoError(err)
    }
}

/// The four persisted session fields, addressed by fixed key names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionField {
    AccessToken,
    RefreshToken,
    ExpireTime,
    Timestamp,
}

impl SessionField {
    pub const ALL: [SessionField; 4] = [
        SessionField::AccessToken,
        SessionField::RefreshToken,
        SessionField::ExpireTime,
        SessionField::Timestamp,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SessionField::AccessToken => "spotify_access_token",
            SessionField::RefreshToken => "spotify_refresh_token",
            SessionField::ExpireTime => "spotify_token_expire_time",
            SessionField::Timestamp => "spotify_token_timestamp",
        }
    }
}

/// Snapshot of the persisted session. Every field is independently
/// optional; a reader can observe a partially written session and must
/// cope with it. Values round-trip as strings, numeric fields included.
#[derive(Debug, Clone, Default)]
pub struct StoredSession {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub expire_time: Option<String>,
    pub timestamp: Option<String>,
}

impl StoredSession {
    /// Token lifetime in seconds, if a parsable value was stored.
    pub fn expire_time_secs(&self) -> Option<f64> {
        self.expire_time.as_deref().and_then(|v| v.parse().ok())
    }

    /// Acquisition time in epoch milliseconds, if a parsable value was
    /// stored.
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.timestamp.as_deref().and_then(|v| v.parse().ok())
    }
}

/// Keyed access to the persisted session fields. No validation or
/// coercion happens here; writes apply per field with no atomicity
/// across a multi-field update.
#[allow(async_fn_in_trait)]
pub trait SessionStore {
    async fn read(&self) -> StoredSession;
    async fn write(&mut self, field: SessionField, value: &str) -> Result<(), StoreError>;
    async fn clear(&mut self) -> Result<(), StoreError>;
}

/// Session store backed by one file per field in the local data
/// directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new() -> Self {
        let mut dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        dir.push("sprofcli/session");
        Self { dir }
    }

    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    async fn read_field(&self, field: SessionField) -> Option<String> {
        async_fs::read_to_string(self.dir.join(field.key()))
            .await
            .ok()
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for FileStore {
    async fn read(&self) -> StoredSession {
        StoredSession {
            access_token: self.read_field(SessionField::AccessToken).await,
            refresh_token: self.read_field(SessionField::RefreshToken).await,
            expire_time: self.read_field(SessionField::ExpireTime).await,
            timestamp: self.read_field(SessionField::Timestamp).await,
        }
    }

    async fn write(&mut self, field: SessionField, value: &str) -> Result<(), StoreError> {
        async_fs::create_dir_all(&self.dir).await?;
        async_fs::write(self.dir.join(field.key()), value).await?;
        Ok(())
    }

    async fn clear(&mut self) -> Result<(), StoreError> {
        for field in SessionField::ALL {
            match async_fs::remove_file(self.dir.join(field.key())).await {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}
