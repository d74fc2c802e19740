//! The endpoint URIs.

/// The transactions page. `GET` renders the page, `POST` performs the
/// action submitted by one of the page's forms.
pub const ROOT: &str = "/";
/// The route for static files.
pub const STATIC: &str = "/static";
