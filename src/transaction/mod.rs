//! Transaction management for the budget tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - Database functions for setting up the transactions table
//! - The summary totals shown at the top of the page
//! - Turning submitted forms into actions and applying them to the store
//! - View handlers for the transactions page

mod action;
mod aggregation;
mod core;
mod handler;
mod page;
mod view;

pub use action::{MAX_AMOUNT, TransactionAction};
pub use aggregation::{Totals, compute_totals};
pub use core::{
    Category, Transaction, TransactionBuilder, TransactionType, create_transaction_table,
    map_transaction_row,
};
pub use page::{get_transactions_page, transaction_action_endpoint};
