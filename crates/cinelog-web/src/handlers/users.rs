//! Handlers for `/users` endpoints.
//!
//! The submitted password is hashed before the record reaches the store;
//! editing a user re-hashes whatever password the form carries.

use std::sync::Arc;

use axum::{
  Form,
  extract::{Path, State},
  response::{Html, Redirect},
};
use cinelog_core::{form::UserForm, store::CatalogStore};
use uuid::Uuid;

use crate::{
  credential::hash_password,
  error::Error,
  handlers::store_err,
  views,
};

/// `GET /users`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Html<String>, Error>
where
  S: CatalogStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let users = store.list_users().await.map_err(store_err)?;
  Ok(Html(views::user_list_page(&users)))
}

/// `GET /users/add`
pub async fn add_form() -> Html<String> {
  Html(views::user_form_page("/users/add", None))
}

/// `POST /users/add`
pub async fn add<S>(
  State(store): State<Arc<S>>,
  Form(form): Form<UserForm>,
) -> Result<Redirect, Error>
where
  S: CatalogStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let hash = hash_password(&form.password)?;
  let input = form.into_record(hash);
  store.insert_user(input).await.map_err(store_err)?;
  Ok(Redirect::to("/users"))
}

/// `GET /users/edit/{id}` — 404 if the user does not exist.
pub async fn edit_form<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Html<String>, Error>
where
  S: CatalogStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let user = store
    .get_user(id)
    .await
    .map_err(store_err)?
    .ok_or_else(|| Error::NotFound(format!("user {id} not found")))?;
  Ok(Html(views::user_form_page(
    &format!("/users/edit/{id}"),
    Some(&user),
  )))
}

/// `POST /users/edit/{id}` — silent no-op for an unknown id.
pub async fn edit<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Form(form): Form<UserForm>,
) -> Result<Redirect, Error>
where
  S: CatalogStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let hash = hash_password(&form.password)?;
  let input = form.into_record(hash);
  store.replace_user(id, input).await.map_err(store_err)?;
  Ok(Redirect::to("/users"))
}

/// `GET /users/delete/{id}`
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Redirect, Error>
where
  S: CatalogStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store.delete_user(id).await.map_err(store_err)?;
  Ok(Redirect::to("/users"))
}
