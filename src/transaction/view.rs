//! Renders the transactions page: summary cards, the add form and the table.

use maud::{Markup, html};
use time::Date;

use crate::{
    endpoints,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, BUTTON_WARNING_STYLE, CARD_BODY_STYLE,
        CARD_HEADER_STYLE, CARD_STYLE, EXPENSE_BADGE_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, SAVINGS_BADGE_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_currency, format_date,
    },
    transaction::{Category, Totals, Transaction},
};

use super::handler::PageData;

pub(crate) const EMPTY_TABLE_MESSAGE: &str = "No transactions found. Add your first transaction!";

/// The full transactions page. `today` is the default date for the add form.
pub(crate) fn transactions_view(page: PageData, today: Date) -> Markup {
    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            @if let Some(alert) = page.alert {
                (alert.into_html())
            }

            (summary_cards(&page.totals))

            div class="grid grid-cols-1 lg:grid-cols-12 gap-6"
            {
                div class="lg:col-span-5" { (add_transaction_form(today)) }
                div class="lg:col-span-7" { (transactions_table(&page.transactions)) }
            }
        }
    };

    base("Transactions", &content)
}

fn summary_cards(totals: &Totals) -> Markup {
    html! {
        div class="grid grid-cols-1 md:grid-cols-3 gap-6"
        {
            (summary_card("Total Savings", "fa-piggy-bank", "savings-total", totals.savings))
            (summary_card("Total Expenses", "fa-shopping-cart", "expenses-total", totals.expenses))
            (summary_card("Balance", "fa-chart-line", "balance-total", totals.balance))
        }
    }
}

fn summary_card(title: &str, icon: &str, id: &str, amount: f64) -> Markup {
    html! {
        div class=(CARD_STYLE)
        {
            div class=(CARD_HEADER_STYLE)
            {
                (title)
                i class={ "fas " (icon) } {}
            }

            div class=(CARD_BODY_STYLE)
            {
                h3 id=(id) class="text-2xl font-bold" { (format_currency(amount)) }
            }
        }
    }
}

fn add_transaction_form(today: Date) -> Markup {
    html! {
        div class=(CARD_STYLE)
        {
            div class=(CARD_HEADER_STYLE)
            {
                span { i class="fas fa-plus-circle me-2" {} "Add New Transaction" }
            }

            div class=(CARD_BODY_STYLE)
            {
                form
                    id="add-transaction-form"
                    method="post"
                    action=(endpoints::ROOT)
                    class="flex flex-col gap-4"
                {
                    div
                    {
                        label for="description" class=(FORM_LABEL_STYLE) { "What's this for?" }
                        input
                            type="text"
                            id="description"
                            name="description"
                            placeholder="E.g., Grocery shopping, Monthly salary"
                            required
                            class=(FORM_TEXT_INPUT_STYLE);
                    }

                    div
                    {
                        label for="amount" class=(FORM_LABEL_STYLE) { "How much? (Rp)" }
                        input
                            type="number"
                            id="amount"
                            name="amount"
                            placeholder="Enter amount"
                            min="0"
                            step="any"
                            required
                            class=(FORM_TEXT_INPUT_STYLE);
                    }

                    div
                    {
                        label for="type" class=(FORM_LABEL_STYLE) { "Money in or out?" }
                        select id="type" name="type" class=(FORM_TEXT_INPUT_STYLE)
                        {
                            option value="savings" { "Money In (Income)" }
                            option value="expense" { "Money Out (Expense)" }
                        }
                    }

                    div
                    {
                        label for="category" class=(FORM_LABEL_STYLE) { "Category" }
                        select id="category" name="category" class=(FORM_TEXT_INPUT_STYLE)
                        {
                            @for category in Category::all() {
                                option value=(category.as_str()) { (category.label()) }
                            }
                        }
                    }

                    div
                    {
                        label for="date" class=(FORM_LABEL_STYLE) { "When?" }
                        input
                            type="date"
                            id="date"
                            name="date"
                            value=(today)
                            required
                            class=(FORM_TEXT_INPUT_STYLE);
                    }

                    button
                        type="submit"
                        name="add_transaction"
                        value="1"
                        class=(BUTTON_PRIMARY_STYLE)
                    {
                        i class="fas fa-save me-2" {}
                        "Save Transaction"
                    }

                    button
                        type="submit"
                        name="clear_data"
                        value="1"
                        formnovalidate
                        onclick="return confirm('Are you sure you want to reset all data? This cannot be undone.')"
                        class=(BUTTON_WARNING_STYLE)
                    {
                        i class="fas fa-trash-alt me-2" {}
                        "Reset All Data"
                    }
                }
            }
        }
    }
}

fn transactions_table(transactions: &[Transaction]) -> Markup {
    html! {
        div class=(CARD_STYLE)
        {
            div class=(CARD_HEADER_STYLE)
            {
                span { i class="fas fa-history me-2" {} "Recent Transactions" }
            }

            div class="overflow-x-auto"
            {
                table id="transactions-table" class="w-full text-sm text-left"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Action" }
                        }
                    }

                    tbody
                    {
                        @if transactions.is_empty() {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td colspan="6" class="px-6 py-8 text-center text-gray-500"
                                {
                                    (EMPTY_TABLE_MESSAGE)
                                }
                            }
                        } @else {
                            @for transaction in transactions {
                                (transaction_row(transaction))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let badge_style = if transaction.type_.is_savings() {
        SAVINGS_BADGE_STYLE
    } else {
        EXPENSE_BADGE_STYLE
    };

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id)
        {
            td class=(TABLE_CELL_STYLE) { (format_date(transaction.date)) }
            td class=(TABLE_CELL_STYLE) { (transaction.description) }
            td class=(TABLE_CELL_STYLE)
            {
                i class={ "fas " (transaction.category.icon()) " me-2" } {}
                (transaction.category.label())
            }
            td class=(TABLE_CELL_STYLE)
            {
                span class=(badge_style) { (transaction.type_.label()) }
            }
            td class=(TABLE_CELL_STYLE) { (format_currency(transaction.amount)) }
            td class=(TABLE_CELL_STYLE)
            {
                form method="post" action=(endpoints::ROOT) class="inline"
                {
                    input type="hidden" name="transaction_id" value=(transaction.id);
                    button
                        type="submit"
                        name="delete_transaction"
                        value="1"
                        aria-label="Delete transaction"
                        onclick="return confirm('Are you sure you want to delete this transaction?')"
                        class=(BUTTON_DELETE_STYLE)
                    {
                        i class="fas fa-trash-alt" {}
                    }
                }
            }
        }
    }
}
