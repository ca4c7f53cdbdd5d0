//! HTML frontend for the Cinelog movie catalog.
//!
//! Exposes an axum [`Router`] backed by any [`cinelog_core::store::CatalogStore`].
//! Twelve handlers — list/add/edit/delete for movies, ratings, and users —
//! plus a static landing page. Successful writes answer with a redirect to
//! the resource's list page.

pub mod credential;
pub mod error;
pub mod handlers;
pub mod labels;
pub mod views;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use cinelog_core::store::CatalogStore;
use serde::Deserialize;

use handlers::{index, movies, ratings, users};

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  /// Location of the SQLite database file — the one external setting that
  /// selects the backing store. Read once at process start.
  pub store_path: PathBuf,
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build the catalog [`Router`] over `store`.
///
/// The returned `Router<()>` can be served directly or nested; the store
/// handle is the only shared state, opened once and reused by all requests.
pub fn router<S>(store: Arc<S>) -> Router<()>
where
  S: CatalogStore + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/", get(index))
    // Movies
    .route("/movies", get(movies::list::<S>))
    .route("/movies/add", get(movies::add_form).post(movies::add::<S>))
    .route(
      "/movies/edit/{id}",
      get(movies::edit_form::<S>).post(movies::edit::<S>),
    )
    .route("/movies/delete/{id}", get(movies::delete::<S>))
    // Ratings
    .route("/ratings", get(ratings::list::<S>))
    .route(
      "/ratings/add",
      get(ratings::add_form::<S>).post(ratings::add::<S>),
    )
    .route(
      "/ratings/edit/{id}",
      get(ratings::edit_form::<S>).post(ratings::edit::<S>),
    )
    .route("/ratings/delete/{id}", get(ratings::delete::<S>))
    // Users
    .route("/users", get(users::list::<S>))
    .route("/users/add", get(users::add_form).post(users::add::<S>))
    .route(
      "/users/edit/{id}",
      get(users::edit_form::<S>).post(users::edit::<S>),
    )
    .route("/users/delete/{id}", get(users::delete::<S>))
    .with_state(store)
}

// ─── Integration tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use cinelog_core::{
    record::{NewMovie, NewRating, NewUser},
    store::CatalogStore,
  };
  use cinelog_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;
  use uuid::Uuid;

  use super::*;
  use crate::labels::{ANONYMOUS_USER_LABEL, MISSING_MOVIE_LABEL};

  async fn store() -> Arc<SqliteStore> {
    Arc::new(SqliteStore::open_in_memory().await.unwrap())
  }

  async fn get_req(store: Arc<SqliteStore>, uri: &str) -> axum::response::Response {
    let req = Request::builder()
      .method("GET")
      .uri(uri)
      .body(Body::empty())
      .unwrap();
    router(store).oneshot(req).await.unwrap()
  }

  async fn post_form(
    store: Arc<SqliteStore>,
    uri: &str,
    body: &str,
  ) -> axum::response::Response {
    let req = Request::builder()
      .method("POST")
      .uri(uri)
      .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
      .body(Body::from(body.to_string()))
      .unwrap();
    router(store).oneshot(req).await.unwrap()
  }

  async fn body_text(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
  }

  fn dune() -> NewMovie {
    NewMovie {
      title:        "Dune".to_string(),
      genre:        "Sci-Fi".to_string(),
      release_year: 2021,
      description:  "Desert planet".to_string(),
    }
  }

  fn alice() -> NewUser {
    NewUser {
      name:          "Alice".to_string(),
      email:         "alice@example.com".to_string(),
      password_hash: "$argon2id$stub".to_string(),
    }
  }

  // ── Landing page ────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn index_renders() {
    let resp = get_req(store().await, "/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Movie Catalog"), "body: {html}");
  }

  // ── Movies ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn post_movie_add_redirects_and_movie_appears_in_list() {
    let s = store().await;

    let resp = post_form(
      s.clone(),
      "/movies/add",
      "title=Dune&genre=Sci-Fi&release_year=2021&description=Desert+planet",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
      resp.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
      "/movies"
    );

    let list = get_req(s, "/movies").await;
    assert_eq!(list.status(), StatusCode::OK);
    let html = body_text(list).await;
    assert!(html.contains("Dune"), "body: {html}");
    assert!(html.contains("2021"), "body: {html}");
  }

  #[tokio::test]
  async fn non_numeric_year_fails_and_creates_nothing() {
    let s = store().await;

    let resp = post_form(
      s.clone(),
      "/movies/add",
      "title=Dune&genre=Sci-Fi&release_year=abc&description=x",
    )
    .await;
    assert!(resp.status().is_client_error(), "status: {}", resp.status());

    assert!(s.list_movies().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn missing_required_field_is_a_client_error() {
    let s = store().await;
    // No genre field at all.
    let resp = post_form(
      s.clone(),
      "/movies/add",
      "title=Dune&release_year=2021&description=x",
    )
    .await;
    assert!(resp.status().is_client_error(), "status: {}", resp.status());
    assert!(s.list_movies().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn edit_movie_form_is_prefilled() {
    let s = store().await;
    let movie = s.insert_movie(dune()).await.unwrap();

    let resp = get_req(s, &format!("/movies/edit/{}", movie.movie_id)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("value=\"Dune\""), "body: {html}");
    assert!(html.contains("value=\"2021\""), "body: {html}");
  }

  #[tokio::test]
  async fn edit_movie_replaces_all_fields() {
    let s = store().await;
    let movie = s.insert_movie(dune()).await.unwrap();

    let resp = post_form(
      s.clone(),
      &format!("/movies/edit/{}", movie.movie_id),
      "title=Dune%3A+Part+Two&genre=Sci-Fi&release_year=2024&description=More+sand",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let fetched = s.get_movie(movie.movie_id).await.unwrap().unwrap();
    assert_eq!(fetched.title, "Dune: Part Two");
    assert_eq!(fetched.release_year, 2024);
  }

  #[tokio::test]
  async fn edit_form_for_unknown_movie_is_404() {
    let resp =
      get_req(store().await, &format!("/movies/edit/{}", Uuid::new_v4())).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn malformed_id_in_path_is_a_client_error_not_a_crash() {
    let resp = get_req(store().await, "/movies/edit/not-a-uuid").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn delete_movie_redirects_and_is_idempotent() {
    let s = store().await;
    let movie = s.insert_movie(dune()).await.unwrap();
    let uri = format!("/movies/delete/{}", movie.movie_id);

    let resp = get_req(s.clone(), &uri).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert!(s.get_movie(movie.movie_id).await.unwrap().is_none());

    // Deleting again is equally fine.
    let resp = get_req(s, &uri).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
  }

  // ── Ratings ─────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn rating_add_form_lists_movies_and_users() {
    let s = store().await;
    s.insert_movie(dune()).await.unwrap();
    s.insert_user(alice()).await.unwrap();

    let resp = get_req(s, "/ratings/add").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Dune"), "body: {html}");
    assert!(html.contains("Alice"), "body: {html}");
  }

  #[tokio::test]
  async fn post_rating_add_stamps_date_and_lists() {
    let s = store().await;
    let movie = s.insert_movie(dune()).await.unwrap();
    let user = s.insert_user(alice()).await.unwrap();

    let resp = post_form(
      s.clone(),
      "/ratings/add",
      &format!(
        "movie_id={}&user_id={}&rating=5&comment=great",
        movie.movie_id, user.user_id
      ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let list = get_req(s, "/ratings").await;
    let html = body_text(list).await;
    assert!(html.contains("Dune"), "body: {html}");
    assert!(html.contains("Alice"), "body: {html}");
    assert!(html.contains("great"), "body: {html}");
  }

  #[tokio::test]
  async fn dangling_rating_degrades_to_placeholder_labels() {
    let s = store().await;
    let movie = s.insert_movie(dune()).await.unwrap();
    let user = s.insert_user(alice()).await.unwrap();
    s.insert_rating(NewRating {
      movie_id: movie.movie_id,
      user_id:  user.user_id,
      rating:   4,
      comment:  "fine".to_string(),
    })
    .await
    .unwrap();

    s.delete_movie(movie.movie_id).await.unwrap();
    s.delete_user(user.user_id).await.unwrap();

    let resp = get_req(s, "/ratings").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains(MISSING_MOVIE_LABEL), "body: {html}");
    assert!(html.contains(ANONYMOUS_USER_LABEL), "body: {html}");
  }

  #[tokio::test]
  async fn rating_with_malformed_movie_id_field_is_a_client_error() {
    let s = store().await;
    let resp = post_form(
      s.clone(),
      "/ratings/add",
      "movie_id=oops&user_id=oops&rating=5&comment=x",
    )
    .await;
    assert!(resp.status().is_client_error(), "status: {}", resp.status());
    assert!(s.list_ratings().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn edit_rating_refreshes_date() {
    let s = store().await;
    let movie = s.insert_movie(dune()).await.unwrap();
    let user = s.insert_user(alice()).await.unwrap();
    let rating = s
      .insert_rating(NewRating {
        movie_id: movie.movie_id,
        user_id:  user.user_id,
        rating:   4,
        comment:  "fine".to_string(),
      })
      .await
      .unwrap();

    let resp = post_form(
      s.clone(),
      &format!("/ratings/edit/{}", rating.rating_id),
      &format!(
        "movie_id={}&user_id={}&rating=1&comment=changed+my+mind",
        movie.movie_id, user.user_id
      ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let fetched = s.get_rating(rating.rating_id).await.unwrap().unwrap();
    assert_eq!(fetched.rating, 1);
    assert_eq!(fetched.comment, "changed my mind");
    assert!(fetched.date >= rating.date);
  }

  // ── Users ───────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn post_user_add_stores_a_hash_not_the_password() {
    let s = store().await;

    let resp = post_form(
      s.clone(),
      "/users/add",
      "name=Alice&email=alice%40example.com&password=hunter2",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let users = s.list_users().await.unwrap();
    assert_eq!(users.len(), 1);
    assert!(users[0].password_hash.starts_with("$argon2"));
    assert_ne!(users[0].password_hash, "hunter2");

    // The listing shows the user but never any credential material.
    let html = body_text(get_req(s, "/users").await).await;
    assert!(html.contains("Alice"), "body: {html}");
    assert!(!html.contains("hunter2"), "body: {html}");
    assert!(!html.contains("$argon2"), "body: {html}");
  }

  #[tokio::test]
  async fn delete_user_redirects_to_user_list() {
    let s = store().await;
    let user = s.insert_user(alice()).await.unwrap();

    let resp = get_req(s, &format!("/users/delete/{}", user.user_id)).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
      resp.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
      "/users"
    );
  }
}
