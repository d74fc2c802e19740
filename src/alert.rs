//! Alert messages shown at the top of the page after an action.

use maud::{Markup, html};

/// How an alert should be styled, from good news to bad news.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// The action worked.
    Success,
    /// The action worked but destroyed data, e.g. a reset.
    Warning,
    /// The action failed.
    Danger,
}

impl AlertKind {
    /// The name used in redirect query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Warning => "warning",
            AlertKind::Danger => "danger",
        }
    }

    /// Parse the kind from a query string value.
    ///
    /// Unknown values are shown as a warning.
    pub fn from_query(value: &str) -> Self {
        match value {
            "success" => AlertKind::Success,
            "danger" => AlertKind::Danger,
            _ => AlertKind::Warning,
        }
    }

    fn style(&self) -> &'static str {
        match self {
            AlertKind::Success => {
                "text-green-800 bg-green-50 border-green-300 \
                dark:bg-gray-800 dark:text-green-400 dark:border-green-800"
            }
            AlertKind::Warning => {
                "text-yellow-800 bg-yellow-50 border-yellow-300 \
                dark:bg-gray-800 dark:text-yellow-300 dark:border-yellow-800"
            }
            AlertKind::Danger => {
                "text-red-800 bg-red-50 border-red-300 \
                dark:bg-gray-800 dark:text-red-400 dark:border-red-800"
            }
        }
    }
}

/// A message for the user along with how it should be styled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// How the alert should be styled.
    pub kind: AlertKind,
    /// The text shown to the user.
    pub message: String,
}

impl Alert {
    /// Create a new success alert.
    pub fn success(message: &str) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.to_owned(),
        }
    }

    /// Create a new warning alert.
    pub fn warning(message: &str) -> Self {
        Self {
            kind: AlertKind::Warning,
            message: message.to_owned(),
        }
    }

    /// Create a new danger alert.
    pub fn danger(message: &str) -> Self {
        Self {
            kind: AlertKind::Danger,
            message: message.to_owned(),
        }
    }

    pub(crate) fn into_html(self) -> Markup {
        html! {
            div
                id="alert"
                role="alert"
                data-alert-kind=(self.kind.as_str())
                class={ "flex items-center justify-between w-full p-4 mb-4 text-sm border rounded-lg " (self.kind.style()) }
            {
                span { (self.message) }

                button
                    type="button"
                    aria-label="Close"
                    onclick="this.parentElement.remove()"
                    class="ms-4 font-bold"
                {
                    "×"
                }
            }
        }
    }
}
