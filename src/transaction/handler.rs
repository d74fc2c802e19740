//! Applies a [TransactionAction] to the store and decides what the user sees
//! next.

use crate::{
    Alert, Error,
    stores::TransactionStore,
    transaction::{Totals, Transaction, TransactionAction, compute_totals},
};

pub(crate) const ADDED_MESSAGE: &str = "Transaction added successfully!";
pub(crate) const INVALID_INPUT_MESSAGE: &str = "Please fill all fields with valid values.";
pub(crate) const DELETED_MESSAGE: &str = "Transaction deleted successfully!";
pub(crate) const RESET_MESSAGE: &str = "All data has been reset.";

/// What to send back after handling an action.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// Redirect to the page with the alert in the query string, so that
    /// reloading the page does not repeat the action.
    Redirect(Alert),
    /// Render the page straight away with an optional alert.
    Render(Option<Alert>),
}

/// Perform `action` against `store`.
///
/// Errors never escape this function, they are logged and turned into a
/// danger alert instead.
pub fn handle_action<T>(action: TransactionAction, store: &T) -> ActionOutcome
where
    T: TransactionStore,
{
    match action {
        TransactionAction::Add(new_transaction) => {
            let builder = match new_transaction.validate() {
                Ok(builder) => builder,
                Err(error) => {
                    tracing::warn!("rejected new transaction: {error}");
                    return ActionOutcome::Render(Some(Alert::danger(INVALID_INPUT_MESSAGE)));
                }
            };

            match store.create(builder) {
                Ok(transaction) => {
                    tracing::info!("created transaction {}", transaction.id);
                    ActionOutcome::Redirect(Alert::success(ADDED_MESSAGE))
                }
                Err(error) => ActionOutcome::Render(Some(storage_error_alert(&error))),
            }
        }
        TransactionAction::Delete(id) => match store.delete(id) {
            Ok(rows_affected) => {
                tracing::info!("deleted transaction {id} ({rows_affected} rows affected)");
                ActionOutcome::Redirect(Alert::success(DELETED_MESSAGE))
            }
            Err(error) => ActionOutcome::Redirect(storage_error_alert(&error)),
        },
        TransactionAction::Reset => match store.delete_all() {
            Ok(rows_affected) => {
                tracing::info!("deleted all {rows_affected} transactions");
                ActionOutcome::Redirect(Alert::warning(RESET_MESSAGE))
            }
            Err(error) => ActionOutcome::Redirect(storage_error_alert(&error)),
        },
        TransactionAction::View => ActionOutcome::Render(None),
    }
}

fn storage_error_alert(error: &Error) -> Alert {
    tracing::error!("could not update transactions: {error}");
    Alert::danger(&format!("Error: {error}"))
}

/// Everything the transactions page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct PageData {
    /// Every stored transaction, newest first.
    pub transactions: Vec<Transaction>,
    /// The totals over `transactions`.
    pub totals: Totals,
    /// The alert to show at the top of the page, if any.
    pub alert: Option<Alert>,
}

/// Read the transactions and their totals from `store`.
///
/// If the read fails the page is still shown, just with no transactions and
/// an alert describing the error in place of `alert`.
pub fn load_page_data<T>(store: &T, alert: Option<Alert>) -> PageData
where
    T: TransactionStore,
{
    match store.get_all() {
        Ok(transactions) => {
            let totals = compute_totals(&transactions);

            PageData {
                transactions,
                totals,
                alert,
            }
        }
        Err(error) => {
            tracing::error!("could not get transactions: {error}");

            PageData {
                transactions: Vec::new(),
                totals: Totals::default(),
                alert: Some(Alert::danger(&format!("Error: {error}"))),
            }
        }
    }
}
