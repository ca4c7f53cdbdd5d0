//! Request handlers, one module per resource.
//!
//! Every handler follows one of three shapes: list (one read, render),
//! add/edit (GET renders a form, POST validates and writes, then redirects
//! to the list page), delete (unconditional write, redirect).

pub mod movies;
pub mod ratings;
pub mod users;

use axum::response::Html;

use crate::{error::Error, views};

pub(crate) fn store_err<E>(e: E) -> Error
where
  E: std::error::Error + Send + Sync + 'static,
{
  Error::Store(Box::new(e))
}

/// `GET /` — static landing page.
pub async fn index() -> Html<String> { Html(views::index_page()) }
