//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings. UUIDs are stored as
//! hyphenated lowercase strings.

use chrono::{DateTime, Utc};
use cinelog_core::record::{Movie, Rating, User};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `movies` row.
pub struct RawMovie {
  pub movie_id:     String,
  pub title:        String,
  pub genre:        String,
  pub release_year: i32,
  pub description:  String,
}

impl RawMovie {
  pub fn into_movie(self) -> Result<Movie> {
    Ok(Movie {
      movie_id:     decode_uuid(&self.movie_id)?,
      title:        self.title,
      genre:        self.genre,
      release_year: self.release_year,
      description:  self.description,
    })
  }
}

/// Raw strings read directly from a `ratings` row.
pub struct RawRating {
  pub rating_id: String,
  pub movie_id:  String,
  pub user_id:   String,
  pub rating:    i32,
  pub comment:   String,
  pub date:      String,
}

impl RawRating {
  pub fn into_rating(self) -> Result<Rating> {
    Ok(Rating {
      rating_id: decode_uuid(&self.rating_id)?,
      movie_id:  decode_uuid(&self.movie_id)?,
      user_id:   decode_uuid(&self.user_id)?,
      rating:    self.rating,
      comment:   self.comment,
      date:      decode_dt(&self.date)?,
    })
  }
}

/// Raw strings read directly from a `users` row.
pub struct RawUser {
  pub user_id:       String,
  pub name:          String,
  pub email:         String,
  pub password_hash: String,
}

impl RawUser {
  pub fn into_user(self) -> Result<User> {
    Ok(User {
      user_id:       decode_uuid(&self.user_id)?,
      name:          self.name,
      email:         self.email,
      password_hash: self.password_hash,
    })
  }
}
