use crate::{
    Error,
    database_id::TransactionId,
    stores::{RowsAffected, TransactionStore},
    transaction::{Transaction, TransactionBuilder},
};

/// A store where every call fails as if the database lock was poisoned.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FailingTransactionStore;

impl TransactionStore for FailingTransactionStore {
    fn create(&self, _builder: TransactionBuilder) -> Result<Transaction, Error> {
        Err(Error::DatabaseLockError)
    }

    fn get(&self, _id: TransactionId) -> Result<Transaction, Error> {
        Err(Error::DatabaseLockError)
    }

    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        Err(Error::DatabaseLockError)
    }

    fn delete(&self, _id: TransactionId) -> Result<RowsAffected, Error> {
        Err(Error::DatabaseLockError)
    }

    fn delete_all(&self) -> Result<RowsAffected, Error> {
        Err(Error::DatabaseLockError)
    }
}
