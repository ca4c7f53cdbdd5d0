//! The `CatalogStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `cinelog-store-sqlite`).
//! Higher layers (`cinelog-web`) depend on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::record::{Movie, NewMovie, NewRating, NewUser, Rating, User};

/// Abstraction over a catalog store backend.
///
/// Each collection gets the same five operations. Semantics shared by all of
/// them:
///
/// - `list_*` returns every record; order is unspecified.
/// - `get_*` returns `None` for an unknown id.
/// - `insert_*` generates the id (and, for ratings, the timestamp) and
///   returns the persisted record.
/// - `replace_*` overwrites all fields of an existing record and is a
///   silent no-op for an unknown id.
/// - `delete_*` is a silent no-op for an unknown id.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait CatalogStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Movies ────────────────────────────────────────────────────────────

  fn list_movies(
    &self,
  ) -> impl Future<Output = Result<Vec<Movie>, Self::Error>> + Send + '_;

  fn get_movie(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Movie>, Self::Error>> + Send + '_;

  fn insert_movie(
    &self,
    input: NewMovie,
  ) -> impl Future<Output = Result<Movie, Self::Error>> + Send + '_;

  fn replace_movie(
    &self,
    id: Uuid,
    input: NewMovie,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  fn delete_movie(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Ratings ───────────────────────────────────────────────────────────

  fn list_ratings(
    &self,
  ) -> impl Future<Output = Result<Vec<Rating>, Self::Error>> + Send + '_;

  fn get_rating(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Rating>, Self::Error>> + Send + '_;

  /// The `date` field of the returned rating is set to the current time.
  fn insert_rating(
    &self,
    input: NewRating,
  ) -> impl Future<Output = Result<Rating, Self::Error>> + Send + '_;

  /// Also overwrites the rating's `date` with the current time.
  fn replace_rating(
    &self,
    id: Uuid,
    input: NewRating,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  fn delete_rating(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Users ─────────────────────────────────────────────────────────────

  fn list_users(
    &self,
  ) -> impl Future<Output = Result<Vec<User>, Self::Error>> + Send + '_;

  fn get_user(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  fn insert_user(
    &self,
    input: NewUser,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  fn replace_user(
    &self,
    id: Uuid,
    input: NewUser,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  fn delete_user(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
