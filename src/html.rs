use maud::{DOCTYPE, Markup, html};

use std::sync::OnceLock;

use num_format::{CustomFormat, ToFormattedString};
use numfmt::{Formatter, Precision};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 bg-blue-500 \
    dark:bg-blue-600 disabled:bg-blue-700 hover:enabled:bg-blue-600 \
    hover:enabled:dark:bg-blue-700 text-white rounded";

pub const BUTTON_WARNING_STYLE: &str = "w-full px-4 py-2 bg-yellow-400 \
    hover:bg-yellow-500 dark:bg-yellow-500 dark:hover:bg-yellow-600 \
    text-gray-900 rounded";

pub const BUTTON_DELETE_STYLE: &str = "text-red-600 hover:text-red-500 \
    dark:text-red-500 dark:hover:text-red-400 bg-transparent \
    border-none cursor-pointer";

// Card styles
pub const CARD_STYLE: &str = "w-full bg-white rounded-lg shadow \
    dark:bg-gray-800 dark:border dark:border-gray-700";

pub const CARD_HEADER_STYLE: &str = "flex items-center justify-between px-6 py-4 \
    border-b border-gray-200 dark:border-gray-700 font-semibold";

pub const CARD_BODY_STYLE: &str = "px-6 py-4";

// Form styles
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white disabled:text-gray-500 bg-gray-50 \
    dark:bg-gray-700 border border-gray-300 dark:border-gray-600 \
    dark:placeholder-gray-400 focus:ring-blue-600 focus:border-blue-600 \
    focus:dark:border-blue-500 focus:dark:ring-blue-500";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs text-gray-700 uppercase \
    bg-gray-50 dark:bg-gray-700 dark:text-gray-400";

pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";

pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Badge styles
pub const SAVINGS_BADGE_STYLE: &str = "inline-flex items-center px-2.5 py-0.5 \
    text-xs font-semibold text-green-800 bg-green-100 rounded-full \
    dark:bg-green-900 dark:text-green-300";

pub const EXPENSE_BADGE_STYLE: &str = "inline-flex items-center px-2.5 py-0.5 \
    text-xs font-semibold text-red-800 bg-red-100 rounded-full \
    dark:bg-red-900 dark:text-red-300";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col px-6 py-8 mx-auto max-w-screen-xl gap-6 text-gray-900 dark:text-white";

const FONT_AWESOME_STYLESHEET: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.0.0/css/all.min.css";
const TAILWIND_SCRIPT: &str = "https://cdn.tailwindcss.com";

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Smart Budget Tracker" }
                script src=(TAILWIND_SCRIPT) {}
                link href=(FONT_AWESOME_STYLESHEET) rel="stylesheet";
                link href="/static/main.css" rel="stylesheet";
            }

            body class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                nav class="bg-blue-700 text-white"
                {
                    div class="max-w-screen-xl mx-auto px-6 py-4"
                    {
                        a href="/" class="text-xl font-semibold"
                        {
                            i class="fas fa-wallet me-2" {}
                            "Smart Budget Tracker"
                        }
                    }
                }

                (content)

                footer class="mt-8 py-6 text-center text-sm text-gray-500 dark:text-gray-400"
                {
                    "Smart Budget Tracker"
                }
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-600 dark:text-blue-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-blue-600
                            hover:bg-blue-800 focus:ring-4 focus:outline-hidden
                            focus:ring-blue-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-blue-900 my-4"
                    {
                        "Back to Homepage"
                    }
                }
            }
        }
    );

    base(title, &content)
}

/// The smallest magnitude numfmt writes in scientific notation.
const SCIENTIFIC_NOTATION_CUTOFF: f64 = 1e12;

/// Format `number` as Indonesian Rupiah rounded to a whole number, e.g.
/// "Rp 15.000" or "Rp -5.000".
///
/// Every digit is written out, however large the amount. Values that are
/// not finite, or too large for a `u128`, are shown as "Rp ∞" or "Rp -∞".
pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("Rp ")
            .unwrap()
            .precision(Precision::Decimals(0))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("Rp -")
            .unwrap()
            .precision(Precision::Decimals(0))
    });

    static LARGE_FMT: OnceLock<CustomFormat> = OnceLock::new();

    let large_fmt =
        LARGE_FMT.get_or_init(|| CustomFormat::builder().separator(".").build().unwrap());

    let number = number.round();
    let sign = if number < 0.0 { "-" } else { "" };

    if !number.is_finite() || number.abs() >= u128::MAX as f64 {
        tracing::warn!("{number} is too large to display as currency");
        return format!("Rp {sign}∞");
    }

    if number.abs() >= SCIENTIFIC_NOTATION_CUTOFF {
        let digits = (number.abs() as u128).to_formatted_string(large_fmt);
        return format!("Rp {sign}{digits}");
    }

    let formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "Rp 0".to_owned()
    };

    // Rupiah group thousands with a dot. There are no decimals to clash with.
    formatted_string.replace(',', ".")
}

/// Format `date` as day, short month name and year, e.g. "05 Jan 2025".
pub fn format_date(date: Date) -> String {
    const DATE_FORMAT: &[BorrowedFormatItem<'_>] =
        format_description!("[day] [month repr:short] [year]");

    date.format(DATE_FORMAT).unwrap_or_else(|error| {
        tracing::error!("could not format the date {date}: {error}");
        date.to_string()
    })
}
