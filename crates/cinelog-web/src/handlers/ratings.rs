//! Handlers for `/ratings` endpoints.
//!
//! The listing resolves each rating's soft references to display labels;
//! the add/edit forms fetch the full movie and user lists to populate the
//! two select controls.

use std::sync::Arc;

use axum::{
  Form,
  extract::{Path, State},
  response::{Html, Redirect},
};
use cinelog_core::{form::RatingForm, store::CatalogStore};
use uuid::Uuid;

use crate::{
  error::Error,
  handlers::store_err,
  labels::resolve_rating_rows,
  views,
};

/// `GET /ratings` — listing with resolved movie/user labels.
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Html<String>, Error>
where
  S: CatalogStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let ratings = store.list_ratings().await.map_err(store_err)?;
  let rows = resolve_rating_rows(store.as_ref(), ratings)
    .await
    .map_err(store_err)?;
  Ok(Html(views::rating_list_page(&rows)))
}

/// `GET /ratings/add`
pub async fn add_form<S>(
  State(store): State<Arc<S>>,
) -> Result<Html<String>, Error>
where
  S: CatalogStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let movies = store.list_movies().await.map_err(store_err)?;
  let users = store.list_users().await.map_err(store_err)?;
  Ok(Html(views::rating_form_page(
    "/ratings/add",
    None,
    &movies,
    &users,
  )))
}

/// `POST /ratings/add` — the store stamps the `date` field.
pub async fn add<S>(
  State(store): State<Arc<S>>,
  Form(form): Form<RatingForm>,
) -> Result<Redirect, Error>
where
  S: CatalogStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let input = form.into_record()?;
  store.insert_rating(input).await.map_err(store_err)?;
  Ok(Redirect::to("/ratings"))
}

/// `GET /ratings/edit/{id}` — 404 if the rating does not exist.
pub async fn edit_form<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Html<String>, Error>
where
  S: CatalogStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let rating = store
    .get_rating(id)
    .await
    .map_err(store_err)?
    .ok_or_else(|| Error::NotFound(format!("rating {id} not found")))?;
  let movies = store.list_movies().await.map_err(store_err)?;
  let users = store.list_users().await.map_err(store_err)?;
  Ok(Html(views::rating_form_page(
    &format!("/ratings/edit/{id}"),
    Some(&rating),
    &movies,
    &users,
  )))
}

/// `POST /ratings/edit/{id}` — replaces all fields and refreshes `date`;
/// silent no-op for an unknown id.
pub async fn edit<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Form(form): Form<RatingForm>,
) -> Result<Redirect, Error>
where
  S: CatalogStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let input = form.into_record()?;
  store.replace_rating(id, input).await.map_err(store_err)?;
  Ok(Redirect::to("/ratings"))
}

/// `GET /ratings/delete/{id}`
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Redirect, Error>
where
  S: CatalogStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store.delete_rating(id).await.map_err(store_err)?;
  Ok(Redirect::to("/ratings"))
}
