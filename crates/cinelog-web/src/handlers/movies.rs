//! Handlers for `/movies` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/movies` | listing |
//! | `GET`/`POST` | `/movies/add` | empty form / create, then redirect |
//! | `GET`/`POST` | `/movies/edit/{id}` | pre-filled form / replace, then redirect |
//! | `GET`  | `/movies/delete/{id}` | delete (no-op if gone), redirect |

use std::sync::Arc;

use axum::{
  Form,
  extract::{Path, State},
  response::{Html, Redirect},
};
use cinelog_core::{form::MovieForm, store::CatalogStore};
use uuid::Uuid;

use crate::{error::Error, handlers::store_err, views};

/// `GET /movies`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Html<String>, Error>
where
  S: CatalogStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let movies = store.list_movies().await.map_err(store_err)?;
  Ok(Html(views::movie_list_page(&movies)))
}

/// `GET /movies/add`
pub async fn add_form() -> Html<String> {
  Html(views::movie_form_page("/movies/add", None))
}

/// `POST /movies/add`
pub async fn add<S>(
  State(store): State<Arc<S>>,
  Form(form): Form<MovieForm>,
) -> Result<Redirect, Error>
where
  S: CatalogStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let input = form.into_record()?;
  store.insert_movie(input).await.map_err(store_err)?;
  Ok(Redirect::to("/movies"))
}

/// `GET /movies/edit/{id}` — 404 if the movie does not exist.
pub async fn edit_form<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Html<String>, Error>
where
  S: CatalogStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let movie = store
    .get_movie(id)
    .await
    .map_err(store_err)?
    .ok_or_else(|| Error::NotFound(format!("movie {id} not found")))?;
  Ok(Html(views::movie_form_page(
    &format!("/movies/edit/{id}"),
    Some(&movie),
  )))
}

/// `POST /movies/edit/{id}` — replacing an unknown id is a silent no-op.
pub async fn edit<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Form(form): Form<MovieForm>,
) -> Result<Redirect, Error>
where
  S: CatalogStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let input = form.into_record()?;
  store.replace_movie(id, input).await.map_err(store_err)?;
  Ok(Redirect::to("/movies"))
}

/// `GET /movies/delete/{id}` — no confirmation step, no error if gone.
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Redirect, Error>
where
  S: CatalogStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store.delete_movie(id).await.map_err(store_err)?;
  Ok(Redirect::to("/movies"))
}
