//! Implements a struct that holds the state of the server.

use crate::stores::TransactionStore;

/// The state of the server.
///
/// Use [create_app_state](crate::stores::sqlite::create_app_state) to get an
/// [AppState] backed by SQLite.
#[derive(Debug, Clone)]
pub struct AppState<T>
where
    T: TransactionStore + Send + Sync,
{
    /// The store for managing [transactions](crate::Transaction).
    pub transaction_store: T,

    /// The local timezone as a canonical timezone name, e.g. "Asia/Jakarta".
    pub local_timezone: String,
}

impl<T> AppState<T>
where
    T: TransactionStore + Send + Sync,
{
    /// Create a new [AppState].
    pub fn new(transaction_store: T, local_timezone: &str) -> Self {
        Self {
            transaction_store,
            local_timezone: local_timezone.to_owned(),
        }
    }
}
