//! Summary totals for the transactions page.

use crate::transaction::Transaction;

/// The money in, money out and what is left over.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    /// The sum of all savings (income) amounts.
    pub savings: f64,
    /// The sum of all amounts that are not savings.
    pub expenses: f64,
    /// `savings - expenses`
    pub balance: f64,
}

/// Sums `transactions` into savings and expenses.
///
/// Anything that is not a savings transaction counts as an expense, so a
/// transaction with an unrecognised type lowers the balance.
pub fn compute_totals(transactions: &[Transaction]) -> Totals {
    let (savings, expenses) =
        transactions
            .iter()
            .fold((0.0, 0.0), |(savings, expenses), transaction| {
                if transaction.type_.is_savings() {
                    (savings + transaction.amount, expenses)
                } else {
                    (savings, expenses + transaction.amount)
                }
            });

    Totals {
        savings,
        expenses,
        balance: savings - expenses,
    }
}
