use axum::{body::Body, response::Response};
use scraper::{Html, Selector};

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    let body = response.into_body();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Could not get response body");
    let text = String::from_utf8_lossy(&body).to_string();

    Html::parse_document(&text)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// The trimmed text of the first element matching `selector`.
#[track_caller]
pub(crate) fn must_get_text(html: &Html, selector: &str) -> String {
    let element = html
        .select(&Selector::parse(selector).unwrap())
        .next()
        .unwrap_or_else(|| panic!("No element found for {selector:?}"));

    element.text().collect::<String>().trim().to_owned()
}

/// The alert's kind and message, if the page shows one.
#[track_caller]
pub(crate) fn get_alert(html: &Html) -> Option<(String, String)> {
    let alert = html
        .select(&Selector::parse("[role=alert]").unwrap())
        .next()?;

    let kind = alert
        .value()
        .attr("data-alert-kind")
        .expect("Alert missing data-alert-kind")
        .to_owned();
    let message = alert
        .select(&Selector::parse("span").unwrap())
        .next()
        .expect("Alert missing message")
        .text()
        .collect::<String>();

    Some((kind, message))
}
