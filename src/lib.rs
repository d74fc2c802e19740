//! Smart Budget Tracker is a single-user web app for keeping track of money
//! coming in (savings) and money going out (expenses).
//!
//! This library provides an HTTP server that directly serves HTML pages.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod database_id;
mod db;
mod endpoints;
mod html;
mod logging;
mod not_found;
mod routing;
pub mod stores;
mod timezone;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use alert::{Alert, AlertKind};
pub use app_state::AppState;
pub use database_id::{DatabaseId, TransactionId};
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use timezone::get_local_offset;
pub use transaction::{
    Category, MAX_AMOUNT, Totals, Transaction, TransactionBuilder, TransactionType,
    compute_totals,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The transaction description was empty, or only whitespace.
    #[error("transaction description cannot be empty")]
    EmptyDescription,

    /// The transaction amount was zero, negative or not a number.
    ///
    /// Amounts record the size of a transaction, the direction of the money
    /// is given by the transaction type, so only positive amounts are valid.
    /// Amounts above [MAX_AMOUNT] are rejected too.
    #[error(
        "{0} is not a valid amount, amounts must be greater than zero and at most {max}",
        max = MAX_AMOUNT
    )]
    InvalidAmount(f64),

    /// The transaction date was missing or not an ISO 8601 calendar date
    /// (e.g., "2025-01-10").
    #[error("\"{0}\" is not a valid date")]
    InvalidDate(String),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    ///
    /// The message is the store's own diagnostic text.
    #[error("{0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl Error {
    /// Whether the error was caused by the client sending invalid data, as
    /// opposed to the store failing.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Error::EmptyDescription | Error::InvalidAmount(_) | Error::InvalidDate(_)
        )
    }
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}
