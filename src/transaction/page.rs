//! Defines the route handlers for the transactions page.

use axum::{
    Form,
    extract::{FromRef, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    Alert, AlertKind, AppState, endpoints, stores::TransactionStore, timezone::local_today,
};

use super::{
    action::{TransactionAction, TransactionActionForm},
    handler::{ActionOutcome, handle_action, load_page_data},
    view::transactions_view,
};

/// The state needed for the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsPageState<T>
where
    T: TransactionStore + Send + Sync,
{
    /// The store for managing transactions.
    pub transaction_store: T,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Jakarta".
    pub local_timezone: String,
}

impl<T> FromRef<AppState<T>> for TransactionsPageState<T>
where
    T: TransactionStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<T>) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The alert carried in the query string after an action redirects back to
/// the page.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertQuery {
    /// The text of the alert.
    pub message: Option<String>,
    /// The kind of alert, e.g. "success".
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl AlertQuery {
    /// The alert to show, if there is a non-empty message.
    pub fn into_alert(self) -> Option<Alert> {
        let message = self.message.filter(|message| !message.is_empty())?;
        let kind = AlertKind::from_query(self.kind.as_deref().unwrap_or_default());

        Some(Alert { kind, message })
    }
}

impl From<Alert> for AlertQuery {
    fn from(alert: Alert) -> Self {
        Self {
            message: Some(alert.message),
            kind: Some(alert.kind.as_str().to_owned()),
        }
    }
}

/// Render the transactions page, showing the alert from the query string if
/// there is one.
pub async fn get_transactions_page<T>(
    State(state): State<TransactionsPageState<T>>,
    Query(query): Query<AlertQuery>,
) -> Response
where
    T: TransactionStore + Send + Sync,
{
    render_page(&state, query.into_alert())
}

/// A route handler for the page's forms.
///
/// Adding, deleting and resetting redirect back to the page on success so
/// that a reload does not submit the form again. An add with invalid values
/// renders the page straight away with an error alert.
pub async fn transaction_action_endpoint<T>(
    State(state): State<TransactionsPageState<T>>,
    Form(form): Form<TransactionActionForm>,
) -> Response
where
    T: TransactionStore + Send + Sync,
{
    let action = TransactionAction::from(form);

    match handle_action(action, &state.transaction_store) {
        ActionOutcome::Redirect(alert) => redirect_with_alert(alert),
        ActionOutcome::Render(alert) => render_page(&state, alert),
    }
}

fn render_page<T>(state: &TransactionsPageState<T>, alert: Option<Alert>) -> Response
where
    T: TransactionStore + Send + Sync,
{
    let page = load_page_data(&state.transaction_store, alert);
    let today = local_today(&state.local_timezone);

    transactions_view(page, today).into_response()
}

fn redirect_with_alert(alert: Alert) -> Response {
    let redirect_url = match serde_urlencoded::to_string(AlertQuery::from(alert)) {
        Ok(query) => format!("{}?{query}", endpoints::ROOT),
        Err(error) => {
            tracing::error!("could not encode alert for redirect: {error}");
            endpoints::ROOT.to_owned()
        }
    };

    Redirect::to(&redirect_url).into_response()
}
