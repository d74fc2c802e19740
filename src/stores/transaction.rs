//! Defines the transaction store trait.

use crate::{
    Error,
    database_id::TransactionId,
    transaction::{Transaction, TransactionBuilder},
};

/// The number of rows changed by a write to the store.
pub type RowsAffected = usize;

/// Handles the creation, retrieval and deletion of transactions.
///
/// Implementers do not check business rules (e.g., positive amounts), that
/// is the job of the code accepting user input.
pub trait TransactionStore {
    /// Create a new transaction in the store.
    ///
    /// The store assigns the ID of the returned transaction.
    fn create(&self, builder: TransactionBuilder) -> Result<Transaction, Error>;

    /// Retrieve a transaction from the store.
    ///
    /// The page only ever lists every transaction, so single lookups are
    /// used by tests to check what a write left behind.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a transaction.
    #[cfg(test)]
    fn get(&self, id: TransactionId) -> Result<Transaction, Error>;

    /// Retrieve every transaction, newest date first.
    ///
    /// Transactions on the same date are returned newest first.
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Delete the transaction with `id`.
    ///
    /// Deleting a transaction that does not exist is not an error, the
    /// returned row count will be zero.
    fn delete(&self, id: TransactionId) -> Result<RowsAffected, Error>;

    /// Delete every transaction and restart ID assignment.
    ///
    /// This cannot be undone.
    fn delete_all(&self) -> Result<RowsAffected, Error>;
}
