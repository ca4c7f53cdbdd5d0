//! Typed form payloads and their conversion into records.
//!
//! Browsers submit every field as a string; these structs are the raw
//! `application/x-www-form-urlencoded` shapes, and the `into_record`
//! conversions are the single place where string-to-integer and
//! string-to-id coercion happens. A value that does not coerce produces a
//! structured [`Error`] instead of a silently defaulted record.

use serde::Deserialize;
use uuid::Uuid;

use crate::{
  Error, Result,
  record::{NewMovie, NewRating, NewUser},
};

fn parse_int(field: &'static str, value: &str) -> Result<i32> {
  value.trim().parse().map_err(|_| Error::InvalidInteger {
    field,
    value: value.to_owned(),
  })
}

fn parse_id(field: &'static str, value: &str) -> Result<Uuid> {
  Uuid::parse_str(value.trim()).map_err(|_| Error::InvalidId {
    field,
    value: value.to_owned(),
  })
}

// ─── Movie ───────────────────────────────────────────────────────────────────

/// Field names match the movie add/edit form inputs.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieForm {
  pub title:        String,
  pub genre:        String,
  pub release_year: String,
  pub description:  String,
}

impl MovieForm {
  pub fn into_record(self) -> Result<NewMovie> {
    let release_year = parse_int("release_year", &self.release_year)?;
    Ok(NewMovie {
      title: self.title,
      genre: self.genre,
      release_year,
      description: self.description,
    })
  }
}

// ─── Rating ──────────────────────────────────────────────────────────────────

/// Field names match the rating add/edit form inputs.
#[derive(Debug, Clone, Deserialize)]
pub struct RatingForm {
  pub movie_id: String,
  pub user_id:  String,
  pub rating:   String,
  pub comment:  String,
}

impl RatingForm {
  pub fn into_record(self) -> Result<NewRating> {
    let movie_id = parse_id("movie_id", &self.movie_id)?;
    let user_id = parse_id("user_id", &self.user_id)?;
    let rating = parse_int("rating", &self.rating)?;
    Ok(NewRating { movie_id, user_id, rating, comment: self.comment })
  }
}

// ─── User ────────────────────────────────────────────────────────────────────

/// Field names match the user add/edit form inputs. The password stays
/// plain text here; the web layer hashes it before building a `NewUser`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserForm {
  pub name:     String,
  pub email:    String,
  pub password: String,
}

impl UserForm {
  pub fn into_record(self, password_hash: String) -> NewUser {
    NewUser { name: self.name, email: self.email, password_hash }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn movie_form(year: &str) -> MovieForm {
    MovieForm {
      title:        "Dune".to_string(),
      genre:        "Sci-Fi".to_string(),
      release_year: year.to_string(),
      description:  "Desert planet".to_string(),
    }
  }

  #[test]
  fn movie_form_coerces_year() {
    let record = movie_form("2021").into_record().unwrap();
    assert_eq!(record.release_year, 2021);
    assert_eq!(record.title, "Dune");
  }

  #[test]
  fn movie_form_trims_whitespace_around_year() {
    let record = movie_form(" 1984 ").into_record().unwrap();
    assert_eq!(record.release_year, 1984);
  }

  #[test]
  fn movie_form_rejects_non_numeric_year() {
    let err = movie_form("abc").into_record().unwrap_err();
    assert_eq!(
      err,
      Error::InvalidInteger { field: "release_year", value: "abc".to_string() }
    );
  }

  #[test]
  fn rating_form_rejects_malformed_ids() {
    let form = RatingForm {
      movie_id: "not-a-uuid".to_string(),
      user_id:  Uuid::new_v4().to_string(),
      rating:   "5".to_string(),
      comment:  String::new(),
    };
    let err = form.into_record().unwrap_err();
    assert!(matches!(err, Error::InvalidId { field: "movie_id", .. }));
  }

  #[test]
  fn rating_form_rejects_non_numeric_rating() {
    let form = RatingForm {
      movie_id: Uuid::new_v4().to_string(),
      user_id:  Uuid::new_v4().to_string(),
      rating:   "five".to_string(),
      comment:  String::new(),
    };
    let err = form.into_record().unwrap_err();
    assert!(matches!(err, Error::InvalidInteger { field: "rating", .. }));
  }

  #[test]
  fn user_form_takes_externally_hashed_password() {
    let form = UserForm {
      name:     "Alice".to_string(),
      email:    "alice@example.com".to_string(),
      password: "secret".to_string(),
    };
    let record = form.into_record("$argon2id$stub".to_string());
    assert_eq!(record.password_hash, "$argon2id$stub");
  }
}
