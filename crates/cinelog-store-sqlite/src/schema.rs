//! SQL schema for the Cinelog SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS movies (
    movie_id     TEXT PRIMARY KEY,
    title        TEXT NOT NULL,
    genre        TEXT NOT NULL,
    release_year INTEGER NOT NULL,
    description  TEXT NOT NULL
);

-- movie_id and user_id are soft references; no REFERENCES clause on
-- purpose. A rating may outlive the movie or user it names.
CREATE TABLE IF NOT EXISTS ratings (
    rating_id TEXT PRIMARY KEY,
    movie_id  TEXT NOT NULL,
    user_id   TEXT NOT NULL,
    rating    INTEGER NOT NULL,
    comment   TEXT NOT NULL,
    date      TEXT NOT NULL    -- ISO 8601 UTC; server-assigned
);

CREATE TABLE IF NOT EXISTS users (
    user_id       TEXT PRIMARY KEY,
    name          TEXT NOT NULL,
    email         TEXT NOT NULL,
    password_hash TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS ratings_movie_idx ON ratings(movie_id);
CREATE INDEX IF NOT EXISTS ratings_user_idx  ON ratings(user_id);

PRAGMA user_version = 1;
";
