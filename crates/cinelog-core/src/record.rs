//! Record types — the three independent collections of the catalog.
//!
//! Each persisted record pairs a store-generated UUID with its field set.
//! The `New*` companions carry everything a caller supplies on insert or
//! replace; ids and server-assigned timestamps are filled in by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Movie ───────────────────────────────────────────────────────────────────

/// A catalogued film.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
  pub movie_id:     Uuid,
  pub title:        String,
  pub genre:        String,
  pub release_year: i32,
  pub description:  String,
}

/// Caller-supplied movie fields for insert/replace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMovie {
  pub title:        String,
  pub genre:        String,
  pub release_year: i32,
  pub description:  String,
}

// ─── Rating ──────────────────────────────────────────────────────────────────

/// A user's rating of a movie.
///
/// `movie_id` and `user_id` are soft references: the named records are not
/// required to exist, and deleting a movie or user leaves ratings pointing
/// at nothing. The read path degrades those to placeholder labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
  pub rating_id: Uuid,
  pub movie_id:  Uuid,
  pub user_id:   Uuid,
  pub rating:    i32,
  pub comment:   String,
  /// Set by the store on insert and overwritten on every replace.
  pub date:      DateTime<Utc>,
}

/// Caller-supplied rating fields; `date` is always store-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRating {
  pub movie_id: Uuid,
  pub user_id:  Uuid,
  pub rating:   i32,
  pub comment:  String,
}

// ─── User ────────────────────────────────────────────────────────────────────

/// A catalog user. Only the one-way hash of the password is ever stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  pub user_id:       Uuid,
  pub name:          String,
  pub email:         String,
  pub password_hash: String,
}

/// Caller-supplied user fields; the caller hashes the password first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
  pub name:          String,
  pub email:         String,
  pub password_hash: String,
}
