//! Defines the core data models and database schema for transactions.

use std::{borrow::Cow, fmt::Display};

use rusqlite::{
    Connection, Row,
    types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef},
};
use time::Date;

use crate::database_id::TransactionId;

// ============================================================================
// MODELS
// ============================================================================

/// Money coming in (savings) or going out (expense).
///
/// The type is stored as free text. Only `savings` counts as money in,
/// every other value, including ones this enum does not know about, is
/// treated as an expense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionType {
    /// Income, e.g. a salary payment.
    Savings,
    /// Money spent.
    Expense,
    /// A type string that is neither `savings` nor `expense`.
    Unrecognised(String),
}

impl TransactionType {
    /// The text stored in the database for this type.
    pub fn as_str(&self) -> &str {
        match self {
            TransactionType::Savings => "savings",
            TransactionType::Expense => "expense",
            TransactionType::Unrecognised(text) => text,
        }
    }

    /// Whether the transaction adds to the savings total.
    pub fn is_savings(&self) -> bool {
        matches!(self, TransactionType::Savings)
    }

    /// The label shown on the type badge.
    pub fn label(&self) -> &'static str {
        if self.is_savings() { "Income" } else { "Expense" }
    }
}

impl From<&str> for TransactionType {
    fn from(value: &str) -> Self {
        match value {
            "savings" => TransactionType::Savings,
            "expense" => TransactionType::Expense,
            other => TransactionType::Unrecognised(other.to_owned()),
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ToSql for TransactionType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TransactionType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str().map(TransactionType::from)
    }
}

/// What a transaction was for.
///
/// Categories outside the fixed set are kept verbatim in [Category::Custom]
/// and displayed with a fallback label and icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    /// Wages.
    Salary,
    /// One-off income on top of wages.
    Bonus,
    /// Groceries and eating out.
    Food,
    /// Fuel, fares and the like.
    Transport,
    /// Films, games, outings.
    Entertainment,
    /// Power, water, internet.
    Utilities,
    /// Housing costs.
    Rent,
    /// General purchases.
    Shopping,
    /// Medical costs.
    Healthcare,
    /// Courses, books, fees.
    Education,
    /// Anything that does not fit the other fixed categories.
    Other,
    /// A category string that is not one of the fixed values.
    Custom(String),
}

impl Category {
    /// The fixed categories in the order they are offered in the form.
    pub fn all() -> [Category; 11] {
        [
            Category::Salary,
            Category::Bonus,
            Category::Food,
            Category::Transport,
            Category::Entertainment,
            Category::Utilities,
            Category::Rent,
            Category::Shopping,
            Category::Healthcare,
            Category::Education,
            Category::Other,
        ]
    }

    /// The text stored in the database and submitted by the form.
    pub fn as_str(&self) -> &str {
        match self {
            Category::Salary => "salary",
            Category::Bonus => "bonus",
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Entertainment => "entertainment",
            Category::Utilities => "utilities",
            Category::Rent => "rent",
            Category::Shopping => "shopping",
            Category::Healthcare => "healthcare",
            Category::Education => "education",
            Category::Other => "other",
            Category::Custom(text) => text,
        }
    }

    /// The human readable name of the category.
    ///
    /// Custom categories have their first letter upper-cased.
    pub fn label(&self) -> Cow<'_, str> {
        let label = match self {
            Category::Salary => "Salary",
            Category::Bonus => "Bonus",
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Utilities => "Utilities",
            Category::Rent => "Rent",
            Category::Shopping => "Shopping",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Other => "Other",
            Category::Custom(text) => return Cow::Owned(capitalise_first_letter(text)),
        };

        Cow::Borrowed(label)
    }

    /// The Font Awesome icon class for the category.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Salary => "fa-money-bill-wave",
            Category::Bonus => "fa-gift",
            Category::Food => "fa-utensils",
            Category::Transport => "fa-car",
            Category::Entertainment => "fa-film",
            Category::Utilities => "fa-bolt",
            Category::Rent => "fa-home",
            Category::Shopping => "fa-shopping-bag",
            Category::Healthcare => "fa-heartbeat",
            Category::Education => "fa-graduation-cap",
            Category::Other => "fa-question-circle",
            Category::Custom(_) => "fa-tag",
        }
    }
}

fn capitalise_first_letter(text: &str) -> String {
    let mut chars = text.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::all()
            .into_iter()
            .find(|category| category.as_str() == value)
            .unwrap_or_else(|| Category::Custom(value.to_owned()))
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ToSql for Category {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Category {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str().map(Category::from)
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the store.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned, always positive.
    pub amount: f64,
    /// Whether money came in or went out.
    pub type_: TransactionType,
    /// What the transaction was for.
    pub category: Category,
    /// When the transaction happened.
    pub date: Date,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability. The
    /// transaction defaults to an expense in the category "other".
    pub fn build(amount: f64, date: Date, description: &str) -> TransactionBuilder {
        TransactionBuilder {
            amount,
            date,
            description: description.to_owned(),
            type_: TransactionType::Expense,
            category: Category::Other,
        }
    }
}

/// The data for a transaction that has not been stored yet.
///
/// The builder does not check business rules, that is the job of the code
/// accepting user input.
///
/// # Examples
///
/// ```ignore
/// use time::macros::date;
///
/// use crate::transaction::{Category, Transaction, TransactionType};
///
/// let salary = Transaction::build(5_000_000.0, date!(2025 - 01 - 25), "Monthly salary")
///     .type_(TransactionType::Savings)
///     .category(Category::Salary);
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// The size of the transaction.
    pub amount: f64,
    /// The date when the transaction occurred.
    pub date: Date,
    /// A human-readable description of the transaction.
    pub description: String,
    /// Whether money came in or went out.
    pub type_: TransactionType,
    /// What the transaction was for.
    pub category: Category,
}

impl TransactionBuilder {
    /// Set the type of the transaction.
    pub fn type_(mut self, type_: TransactionType) -> Self {
        self.type_ = type_;
        self
    }

    /// Set the category of the transaction.
    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create the transactions table in the database.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                description TEXT NOT NULL,
                amount REAL NOT NULL,
                type TEXT NOT NULL,
                category TEXT NOT NULL,
                date TEXT NOT NULL
                )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
///
/// Expects the columns in the order `id, description, amount, type, category, date`.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let description = row.get(1)?;
    let amount = row.get(2)?;
    let type_ = row.get(3)?;
    let category = row.get(4)?;
    let date = row.get(5)?;

    Ok(Transaction {
        id,
        description,
        amount,
        type_,
        category,
        date,
    })
}

#[cfg(test)]
mod model_tests {
    use super::{Category, TransactionType};

    #[test]
    fn parses_known_types() {
        assert_eq!(TransactionType::from("savings"), TransactionType::Savings);
        assert_eq!(TransactionType::from("expense"), TransactionType::Expense);
    }

    #[test]
    fn keeps_unrecognised_type_text() {
        let type_ = TransactionType::from("unknown");

        assert_eq!(type_, TransactionType::Unrecognised("unknown".to_owned()));
        assert_eq!(type_.as_str(), "unknown");
        assert!(!type_.is_savings());
        assert_eq!(type_.label(), "Expense");
    }

    #[test]
    fn type_matching_is_exact() {
        assert_eq!(
            TransactionType::from("Savings"),
            TransactionType::Unrecognised("Savings".to_owned())
        );
    }

    #[test]
    fn known_categories_round_trip_through_text() {
        for category in Category::all() {
            assert_eq!(Category::from(category.as_str()), category);
        }
    }

    #[test]
    fn food_has_label_and_icon() {
        let category = Category::from("food");

        assert_eq!(category, Category::Food);
        assert_eq!(category.label(), "Food");
        assert_eq!(category.icon(), "fa-utensils");
    }

    #[test]
    fn custom_category_uses_fallbacks() {
        let category = Category::from("groceries");

        assert_eq!(category, Category::Custom("groceries".to_owned()));
        assert_eq!(category.label(), "Groceries");
        assert_eq!(category.icon(), "fa-tag");
    }

    #[test]
    fn empty_custom_category_has_empty_label() {
        assert_eq!(Category::from("").label(), "");
    }
}
