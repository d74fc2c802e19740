//! Implements a SQLite backed transaction store.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;

use crate::{
    Error,
    database_id::TransactionId,
    stores::{RowsAffected, TransactionStore},
    transaction::{Transaction, TransactionBuilder, map_transaction_row},
};

/// Stores transactions in a SQLite database.
///
/// The `transactions` table must be set up in the database first, see
/// [initialize_db](crate::initialize_db).
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock_connection(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Create a new transaction in the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DatabaseLockError] if the connection lock is poisoned,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn create(&self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        let connection = self.lock_connection()?;

        let transaction = connection
            .prepare(
                "INSERT INTO transactions (description, amount, type, category, date)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 RETURNING id, description, amount, type, category, date",
            )?
            .query_row(
                (
                    builder.description,
                    builder.amount,
                    builder.type_,
                    builder.category,
                    builder.date,
                ),
                map_transaction_row,
            )?;

        Ok(transaction)
    }

    /// Retrieve a transaction in the database by its `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid transaction,
    /// - or [Error::SqlError] there is some other SQL error.
    #[cfg(test)]
    fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        let connection = self.lock_connection()?;

        let transaction = connection
            .prepare(
                "SELECT id, description, amount, type, category, date
                 FROM transactions WHERE id = :id",
            )?
            .query_row(&[(":id", &id)], map_transaction_row)?;

        Ok(transaction)
    }

    /// Retrieve all transactions, ordered by date and then ID, newest first.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL error.
    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        let connection = self.lock_connection()?;

        connection
            .prepare(
                "SELECT id, description, amount, type, category, date
                 FROM transactions ORDER BY date DESC, id DESC",
            )?
            .query_map([], map_transaction_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
            .collect()
    }

    fn delete(&self, id: TransactionId) -> Result<RowsAffected, Error> {
        let connection = self.lock_connection()?;

        connection
            .execute("DELETE FROM transactions WHERE id = :id", &[(":id", &id)])
            .map_err(Error::from)
    }

    /// Delete all transactions and reset the ID sequence in one database
    /// transaction.
    fn delete_all(&self) -> Result<RowsAffected, Error> {
        let mut connection = self.lock_connection()?;

        let sql_transaction = connection.transaction()?;
        let rows_affected = sql_transaction.execute("DELETE FROM transactions", ())?;
        sql_transaction.execute(
            "DELETE FROM sqlite_sequence WHERE name = 'transactions'",
            (),
        )?;
        sql_transaction.commit()?;

        Ok(rows_affected)
    }
}
