//! [`SqliteStore`] — the SQLite implementation of [`CatalogStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use cinelog_core::{
  record::{Movie, NewMovie, NewRating, NewUser, Rating, User},
  store::CatalogStore,
};

use crate::{
  Error, Result,
  encode::{RawMovie, RawRating, RawUser, encode_dt, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Cinelog catalog store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. The
/// connection is opened once at process start and shared by all requests;
/// concurrent replaces of the same record are last-write-wins.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── CatalogStore impl ───────────────────────────────────────────────────────

impl CatalogStore for SqliteStore {
  type Error = Error;

  // ── Movies ────────────────────────────────────────────────────────────────

  async fn list_movies(&self) -> Result<Vec<Movie>> {
    let raws: Vec<RawMovie> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT movie_id, title, genre, release_year, description
           FROM movies",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawMovie {
              movie_id:     row.get(0)?,
              title:        row.get(1)?,
              genre:        row.get(2)?,
              release_year: row.get(3)?,
              description:  row.get(4)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawMovie::into_movie).collect()
  }

  async fn get_movie(&self, id: Uuid) -> Result<Option<Movie>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawMovie> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT movie_id, title, genre, release_year, description
               FROM movies WHERE movie_id = ?1",
              rusqlite::params![id_str],
              |row| {
                Ok(RawMovie {
                  movie_id:     row.get(0)?,
                  title:        row.get(1)?,
                  genre:        row.get(2)?,
                  release_year: row.get(3)?,
                  description:  row.get(4)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawMovie::into_movie).transpose()
  }

  async fn insert_movie(&self, input: NewMovie) -> Result<Movie> {
    let movie = Movie {
      movie_id:     Uuid::new_v4(),
      title:        input.title,
      genre:        input.genre,
      release_year: input.release_year,
      description:  input.description,
    };

    let id_str = encode_uuid(movie.movie_id);
    let title = movie.title.clone();
    let genre = movie.genre.clone();
    let release_year = movie.release_year;
    let description = movie.description.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO movies (movie_id, title, genre, release_year, description)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![id_str, title, genre, release_year, description],
        )?;
        Ok(())
      })
      .await?;

    Ok(movie)
  }

  async fn replace_movie(&self, id: Uuid, input: NewMovie) -> Result<()> {
    let id_str = encode_uuid(id);

    // Zero affected rows means the id is unknown; that is not an error.
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE movies
           SET title = ?2, genre = ?3, release_year = ?4, description = ?5
           WHERE movie_id = ?1",
          rusqlite::params![
            id_str,
            input.title,
            input.genre,
            input.release_year,
            input.description,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn delete_movie(&self, id: Uuid) -> Result<()> {
    let id_str = encode_uuid(id);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "DELETE FROM movies WHERE movie_id = ?1",
          rusqlite::params![id_str],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Ratings ───────────────────────────────────────────────────────────────

  async fn list_ratings(&self) -> Result<Vec<Rating>> {
    let raws: Vec<RawRating> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT rating_id, movie_id, user_id, rating, comment, date
           FROM ratings",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawRating {
              rating_id: row.get(0)?,
              movie_id:  row.get(1)?,
              user_id:   row.get(2)?,
              rating:    row.get(3)?,
              comment:   row.get(4)?,
              date:      row.get(5)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRating::into_rating).collect()
  }

  async fn get_rating(&self, id: Uuid) -> Result<Option<Rating>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawRating> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT rating_id, movie_id, user_id, rating, comment, date
               FROM ratings WHERE rating_id = ?1",
              rusqlite::params![id_str],
              |row| {
                Ok(RawRating {
                  rating_id: row.get(0)?,
                  movie_id:  row.get(1)?,
                  user_id:   row.get(2)?,
                  rating:    row.get(3)?,
                  comment:   row.get(4)?,
                  date:      row.get(5)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawRating::into_rating).transpose()
  }

  async fn insert_rating(&self, input: NewRating) -> Result<Rating> {
    let rating = Rating {
      rating_id: Uuid::new_v4(),
      movie_id:  input.movie_id,
      user_id:   input.user_id,
      rating:    input.rating,
      comment:   input.comment,
      date:      Utc::now(),
    };

    let id_str = encode_uuid(rating.rating_id);
    let movie_id_str = encode_uuid(rating.movie_id);
    let user_id_str = encode_uuid(rating.user_id);
    let value = rating.rating;
    let comment = rating.comment.clone();
    let date_str = encode_dt(rating.date);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO ratings (rating_id, movie_id, user_id, rating, comment, date)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            id_str,
            movie_id_str,
            user_id_str,
            value,
            comment,
            date_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(rating)
  }

  async fn replace_rating(&self, id: Uuid, input: NewRating) -> Result<()> {
    let id_str = encode_uuid(id);
    let movie_id_str = encode_uuid(input.movie_id);
    let user_id_str = encode_uuid(input.user_id);
    let date_str = encode_dt(Utc::now());

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE ratings
           SET movie_id = ?2, user_id = ?3, rating = ?4, comment = ?5, date = ?6
           WHERE rating_id = ?1",
          rusqlite::params![
            id_str,
            movie_id_str,
            user_id_str,
            input.rating,
            input.comment,
            date_str,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn delete_rating(&self, id: Uuid) -> Result<()> {
    let id_str = encode_uuid(id);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "DELETE FROM ratings WHERE rating_id = ?1",
          rusqlite::params![id_str],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Users ─────────────────────────────────────────────────────────────────

  async fn list_users(&self) -> Result<Vec<User>> {
    let raws: Vec<RawUser> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT user_id, name, email, password_hash FROM users",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawUser {
              user_id:       row.get(0)?,
              name:          row.get(1)?,
              email:         row.get(2)?,
              password_hash: row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawUser::into_user).collect()
  }

  async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawUser> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT user_id, name, email, password_hash
               FROM users WHERE user_id = ?1",
              rusqlite::params![id_str],
              |row| {
                Ok(RawUser {
                  user_id:       row.get(0)?,
                  name:          row.get(1)?,
                  email:         row.get(2)?,
                  password_hash: row.get(3)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawUser::into_user).transpose()
  }

  async fn insert_user(&self, input: NewUser) -> Result<User> {
    let user = User {
      user_id:       Uuid::new_v4(),
      name:          input.name,
      email:         input.email,
      password_hash: input.password_hash,
    };

    let id_str = encode_uuid(user.user_id);
    let name = user.name.clone();
    let email = user.email.clone();
    let password_hash = user.password_hash.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO users (user_id, name, email, password_hash)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![id_str, name, email, password_hash],
        )?;
        Ok(())
      })
      .await?;

    Ok(user)
  }

  async fn replace_user(&self, id: Uuid, input: NewUser) -> Result<()> {
    let id_str = encode_uuid(id);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE users SET name = ?2, email = ?3, password_hash = ?4
           WHERE user_id = ?1",
          rusqlite::params![
            id_str,
            input.name,
            input.email,
            input.password_hash,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn delete_user(&self, id: Uuid) -> Result<()> {
    let id_str = encode_uuid(id);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "DELETE FROM users WHERE user_id = ?1",
          rusqlite::params![id_str],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
