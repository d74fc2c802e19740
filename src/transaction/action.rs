//! Turns the submitted page form into the action the user asked for.

use serde::Deserialize;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error,
    database_id::TransactionId,
    transaction::{Category, Transaction, TransactionBuilder, TransactionType},
};

/// The fields posted by any of the forms on the transactions page.
///
/// Exactly one of the submit buttons `add_transaction`, `delete_transaction`
/// or `clear_data` is expected. Only its presence matters, not its value.
/// Missing text fields are treated as empty strings.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct TransactionActionForm {
    /// Present when the add form was submitted.
    pub add_transaction: Option<String>,
    /// Present when a row's delete button was pressed.
    pub delete_transaction: Option<String>,
    /// Present when the reset button was pressed.
    pub clear_data: Option<String>,
    /// Text detailing the transaction.
    #[serde(default)]
    pub description: String,
    /// The size of the transaction, as typed by the user.
    #[serde(default)]
    pub amount: String,
    /// `savings` or `expense`.
    #[serde(default, rename = "type")]
    pub type_: String,
    /// One of the category values offered by the form.
    #[serde(default)]
    pub category: String,
    /// The date of the transaction in the format `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    /// The ID of the transaction to delete.
    #[serde(default)]
    pub transaction_id: String,
}

/// The largest amount a transaction may have, one quadrillion rupiah.
///
/// Whole amounts up to this size are stored exactly in an `f64`, and the
/// totals of any realistic number of them stay finite.
pub const MAX_AMOUNT: f64 = 1e15;

/// The raw, not yet validated, values for a new transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct AddTransaction {
    /// The description with surrounding whitespace removed.
    pub description: String,
    /// The coerced amount, `0.0` if the submitted text was not a number.
    pub amount: f64,
    /// Whether money came in or went out.
    pub type_: TransactionType,
    /// What the transaction was for.
    pub category: Category,
    /// The submitted date text.
    pub date: String,
}

impl AddTransaction {
    /// Check the business rules and turn the values into a
    /// [TransactionBuilder] ready for the store.
    ///
    /// # Errors
    /// Returns a:
    /// - [Error::EmptyDescription] if the description is empty,
    /// - [Error::InvalidAmount] if the amount is not greater than zero or is
    ///   larger than [MAX_AMOUNT],
    /// - or [Error::InvalidDate] if the date is empty or not a calendar date.
    pub fn validate(self) -> Result<TransactionBuilder, Error> {
        const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

        if self.description.is_empty() {
            return Err(Error::EmptyDescription);
        }

        if self.amount <= 0.0 || self.amount > MAX_AMOUNT || !self.amount.is_finite() {
            return Err(Error::InvalidAmount(self.amount));
        }

        let date =
            Date::parse(&self.date, DATE_FORMAT).map_err(|_| Error::InvalidDate(self.date))?;

        Ok(Transaction::build(self.amount, date, &self.description)
            .type_(self.type_)
            .category(self.category))
    }
}

/// What the user asked the page to do.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionAction {
    /// Store a new transaction.
    Add(AddTransaction),
    /// Remove the transaction with the given ID.
    Delete(TransactionId),
    /// Remove every transaction.
    Reset,
    /// Just show the page.
    View,
}

impl From<TransactionActionForm> for TransactionAction {
    fn from(form: TransactionActionForm) -> Self {
        if form.add_transaction.is_some() {
            TransactionAction::Add(AddTransaction {
                description: form.description.trim().to_owned(),
                amount: parse_amount(&form.amount),
                type_: TransactionType::from(form.type_.as_str()),
                category: Category::from(form.category.as_str()),
                date: form.date,
            })
        } else if form.delete_transaction.is_some() {
            TransactionAction::Delete(parse_transaction_id(&form.transaction_id))
        } else if form.clear_data.is_some() {
            TransactionAction::Reset
        } else {
            TransactionAction::View
        }
    }
}

/// Read a transaction ID from form text.
///
/// Leading whitespace and an optional sign are accepted, then as many ASCII
/// digits as follow. Text without leading digits gives `0`, which never
/// matches a stored transaction. Values too large for an ID saturate.
pub fn parse_transaction_id(text: &str) -> TransactionId {
    let text = text.trim_start();

    let (is_negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0, |id: TransactionId, digit| {
            let digit = TransactionId::from(digit - b'0');
            let id = id.saturating_mul(10);

            if is_negative {
                id.saturating_sub(digit)
            } else {
                id.saturating_add(digit)
            }
        })
}

/// Read an amount from form text.
///
/// Like [parse_transaction_id], leading whitespace is skipped and the
/// longest leading decimal number is read, so "15000abc" gives `15000.0`.
/// Text without a leading number, or a number too large for an `f64`, gives
/// `0.0`.
pub fn parse_amount(text: &str) -> f64 {
    leading_number(text.trim_start())
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .unwrap_or(0.0)
}

/// The longest prefix of `text` of the form `[+-]digits[.digits][e[+-]digits]`.
///
/// Either the integer or the fraction digits may be missing, but not both.
fn leading_number(text: &str) -> &str {
    let bytes = text.as_bytes();
    let count_digits = |start: usize| {
        bytes[start.min(bytes.len())..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let integer_digits = count_digits(end);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = count_digits(end + 1);

        if integer_digits > 0 || fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }

    if integer_digits == 0 && fraction_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exponent_sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent_digits = count_digits(end + 1 + exponent_sign);

        if exponent_digits > 0 {
            end += 1 + exponent_sign + exponent_digits;
        }
    }

    &text[..end]
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        Error,
        transaction::{Category, Transaction, TransactionType},
    };

    use super::{
        AddTransaction, MAX_AMOUNT, TransactionAction, TransactionActionForm, parse_amount,
        parse_transaction_id,
    };

    fn add_form() -> TransactionActionForm {
        TransactionActionForm {
            add_transaction: Some("1".to_owned()),
            description: "  Coffee  ".to_owned(),
            amount: "15000".to_owned(),
            type_: "expense".to_owned(),
            category: "food".to_owned(),
            date: "2025-01-10".to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn add_form_becomes_add_action() {
        let action = TransactionAction::from(add_form());

        assert_eq!(
            action,
            TransactionAction::Add(AddTransaction {
                description: "Coffee".to_owned(),
                amount: 15_000.0,
                type_: TransactionType::Expense,
                category: Category::Food,
                date: "2025-01-10".to_owned(),
            })
        );
    }

    #[test]
    fn delete_form_becomes_delete_action() {
        let form = TransactionActionForm {
            delete_transaction: Some(String::new()),
            transaction_id: "42".to_owned(),
            ..Default::default()
        };

        assert_eq!(TransactionAction::from(form), TransactionAction::Delete(42));
    }

    #[test]
    fn clear_form_becomes_reset_action() {
        let form = TransactionActionForm {
            clear_data: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(TransactionAction::from(form), TransactionAction::Reset);
    }

    #[test]
    fn form_without_button_is_view() {
        assert_eq!(
            TransactionAction::from(TransactionActionForm::default()),
            TransactionAction::View
        );
    }

    #[test]
    fn add_takes_priority_over_other_buttons() {
        let form = TransactionActionForm {
            delete_transaction: Some(String::new()),
            clear_data: Some(String::new()),
            ..add_form()
        };

        assert!(matches!(
            TransactionAction::from(form),
            TransactionAction::Add(_)
        ));
    }

    #[test]
    fn delete_takes_priority_over_reset() {
        let form = TransactionActionForm {
            delete_transaction: Some(String::new()),
            clear_data: Some(String::new()),
            transaction_id: "3".to_owned(),
            ..Default::default()
        };

        assert_eq!(TransactionAction::from(form), TransactionAction::Delete(3));
    }

    #[test]
    fn empty_button_value_still_counts_as_pressed() {
        let form: TransactionActionForm =
            serde_urlencoded::from_str("clear_data=").expect("Could not parse form");

        assert_eq!(TransactionAction::from(form), TransactionAction::Reset);
    }

    #[test]
    fn missing_fields_are_empty() {
        let form: TransactionActionForm =
            serde_urlencoded::from_str("add_transaction=1").expect("Could not parse form");

        assert_eq!(form.description, "");
        assert_eq!(form.amount, "");
        assert_eq!(form.date, "");
        assert_eq!(form.transaction_id, "");
    }

    #[test]
    fn validates_into_builder() {
        let TransactionAction::Add(add) = TransactionAction::from(add_form()) else {
            panic!("want add action");
        };

        let builder = add.validate().expect("Could not validate transaction");

        assert_eq!(
            builder,
            Transaction::build(15_000.0, date!(2025 - 01 - 10), "Coffee")
                .type_(TransactionType::Expense)
                .category(Category::Food)
        );
    }

    #[test]
    fn whitespace_description_is_rejected() {
        let form = TransactionActionForm {
            description: "   ".to_owned(),
            ..add_form()
        };
        let TransactionAction::Add(add) = TransactionAction::from(form) else {
            panic!("want add action");
        };

        assert_eq!(add.validate(), Err(Error::EmptyDescription));
    }

    #[test]
    fn zero_and_negative_amounts_are_rejected() {
        for amount in ["0", "-10", "abc", ""] {
            let form = TransactionActionForm {
                amount: amount.to_owned(),
                ..add_form()
            };
            let TransactionAction::Add(add) = TransactionAction::from(form) else {
                panic!("want add action");
            };

            assert!(
                matches!(add.validate(), Err(Error::InvalidAmount(_))),
                "want amount {amount:?} to be rejected"
            );
        }
    }

    #[test]
    fn bad_dates_are_rejected() {
        for date in ["", "10/01/2025", "2025-02-30"] {
            let form = TransactionActionForm {
                date: date.to_owned(),
                ..add_form()
            };
            let TransactionAction::Add(add) = TransactionAction::from(form) else {
                panic!("want add action");
            };

            assert_eq!(add.validate(), Err(Error::InvalidDate(date.to_owned())));
        }
    }

    #[test]
    fn parses_transaction_ids() {
        assert_eq!(parse_transaction_id("7"), 7);
        assert_eq!(parse_transaction_id("  12"), 12);
        assert_eq!(parse_transaction_id("+5"), 5);
        assert_eq!(parse_transaction_id("-3"), -3);
        assert_eq!(parse_transaction_id("12abc"), 12);
    }

    #[test]
    fn non_numeric_transaction_id_is_zero() {
        assert_eq!(parse_transaction_id(""), 0);
        assert_eq!(parse_transaction_id("abc"), 0);
        assert_eq!(parse_transaction_id("-"), 0);
    }

    #[test]
    fn huge_transaction_id_saturates() {
        assert_eq!(parse_transaction_id("99999999999999999999999"), i64::MAX);
        assert_eq!(parse_transaction_id("-99999999999999999999999"), i64::MIN);
    }

    #[test]
    fn parses_amounts() {
        assert_eq!(parse_amount("15000"), 15_000.0);
        assert_eq!(parse_amount(" 12.5 "), 12.5);
        assert_eq!(parse_amount("+7"), 7.0);
        assert_eq!(parse_amount("-3.5"), -3.5);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("2."), 2.0);
        assert_eq!(parse_amount("1.5e3"), 1_500.0);
    }

    #[test]
    fn amounts_read_leading_number() {
        assert_eq!(parse_amount("15000abc"), 15_000.0);
        assert_eq!(parse_amount("12.5.3"), 12.5);
        assert_eq!(parse_amount("3e"), 3.0);
        assert_eq!(parse_amount("3e+"), 3.0);
        assert_eq!(parse_amount("1,000"), 1.0);
    }

    #[test]
    fn amounts_without_leading_number_are_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("."), 0.0);
        assert_eq!(parse_amount("-"), 0.0);
        assert_eq!(parse_amount("e5"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
    }

    #[test]
    fn amounts_too_large_for_f64_are_zero() {
        assert_eq!(parse_amount("1e999"), 0.0);
    }

    #[test]
    fn amount_with_trailing_text_is_accepted() {
        let form = TransactionActionForm {
            amount: "15000abc".to_owned(),
            ..add_form()
        };
        let TransactionAction::Add(add) = TransactionAction::from(form) else {
            panic!("want add action");
        };

        let builder = add.validate().expect("Could not validate transaction");

        assert_eq!(builder.amount, 15_000.0);
    }

    #[test]
    fn amounts_above_the_maximum_are_rejected() {
        for amount in ["1e308", "1000000000000001"] {
            let form = TransactionActionForm {
                amount: amount.to_owned(),
                ..add_form()
            };
            let TransactionAction::Add(add) = TransactionAction::from(form) else {
                panic!("want add action");
            };

            assert!(
                matches!(add.validate(), Err(Error::InvalidAmount(_))),
                "want amount {amount:?} to be rejected"
            );
        }
    }

    #[test]
    fn maximum_amount_is_accepted() {
        let form = TransactionActionForm {
            amount: "1000000000000000".to_owned(),
            ..add_form()
        };
        let TransactionAction::Add(add) = TransactionAction::from(form) else {
            panic!("want add action");
        };

        let builder = add.validate().expect("Could not validate transaction");

        assert_eq!(builder.amount, MAX_AMOUNT);
    }
}
