mod refresh;
mod session;
mod store;

pub use refresh::HttpRefresh;
pub use refresh::RefreshExchange;
pub use session::PLACEHOLDER_TOKEN;
pub use session::SessionManager;
pub use session::has_expired;
pub use store::FileStore;
pub use store::SessionField;
pub use store::SessionStore;
pub use store::StoreError;
pub use store::StoredSession;
