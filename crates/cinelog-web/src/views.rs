//! HTML rendering.
//!
//! Plain string building — every page is a function from records to markup.
//! No state, no logic beyond interpolation; all record data passes through
//! [`escape`].

use cinelog_core::record::{Movie, Rating, User};

use crate::labels::RatingRow;

/// Minimal HTML entity escaping for interpolated text and attribute values.
pub fn escape(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      other => out.push(other),
    }
  }
  out
}

/// Shared page shell with the navigation bar.
fn layout(title: &str, body: &str) -> String {
  format!(
    r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} — Cinelog</title>
</head>
<body>
<nav>
<a href="/">Home</a> |
<a href="/movies">Movies</a> |
<a href="/ratings">Ratings</a> |
<a href="/users">Users</a>
</nav>
<h1>{title}</h1>
{body}
</body>
</html>
"#,
    title = escape(title),
  )
}

// ─── Landing page ────────────────────────────────────────────────────────────

pub fn index_page() -> String {
  layout(
    "Movie Catalog",
    "<p>Browse and edit movies, ratings, and users.</p>",
  )
}

// ─── Movies ──────────────────────────────────────────────────────────────────

pub fn movie_list_page(movies: &[Movie]) -> String {
  let mut rows = String::new();
  for m in movies {
    rows.push_str(&format!(
      "<tr><td>{title}</td><td>{genre}</td><td>{year}</td><td>{desc}</td>\
       <td><a href=\"/movies/edit/{id}\">edit</a> \
       <a href=\"/movies/delete/{id}\">delete</a></td></tr>\n",
      title = escape(&m.title),
      genre = escape(&m.genre),
      year = m.release_year,
      desc = escape(&m.description),
      id = m.movie_id,
    ));
  }

  let body = format!(
    "<p><a href=\"/movies/add\">Add movie</a></p>\n\
     <table border=\"1\">\n\
     <tr><th>Title</th><th>Genre</th><th>Year</th><th>Description</th><th></th></tr>\n\
     {rows}</table>"
  );
  layout("Movies", &body)
}

/// Add form when `movie` is `None`, pre-filled edit form otherwise.
pub fn movie_form_page(action: &str, movie: Option<&Movie>) -> String {
  let (title, genre, year, description) = match movie {
    Some(m) => (
      escape(&m.title),
      escape(&m.genre),
      m.release_year.to_string(),
      escape(&m.description),
    ),
    None => Default::default(),
  };

  let body = format!(
    "<form method=\"post\" action=\"{action}\">\n\
     <p><label>Title <input name=\"title\" value=\"{title}\" required></label></p>\n\
     <p><label>Genre <input name=\"genre\" value=\"{genre}\" required></label></p>\n\
     <p><label>Release year <input name=\"release_year\" value=\"{year}\" required></label></p>\n\
     <p><label>Description <textarea name=\"description\">{description}</textarea></label></p>\n\
     <p><button type=\"submit\">Save</button></p>\n\
     </form>",
    action = escape(action),
  );
  let heading = if movie.is_some() { "Edit Movie" } else { "Add Movie" };
  layout(heading, &body)
}

// ─── Ratings ─────────────────────────────────────────────────────────────────

pub fn rating_list_page(rows: &[RatingRow]) -> String {
  let mut table_rows = String::new();
  for row in rows {
    table_rows.push_str(&format!(
      "<tr><td>{movie}</td><td>{user}</td><td>{value}</td><td>{comment}</td>\
       <td>{date}</td>\
       <td><a href=\"/ratings/edit/{id}\">edit</a> \
       <a href=\"/ratings/delete/{id}\">delete</a></td></tr>\n",
      movie = escape(&row.movie_title),
      user = escape(&row.user_name),
      value = row.rating.rating,
      comment = escape(&row.rating.comment),
      date = row.rating.date.format("%Y-%m-%d %H:%M"),
      id = row.rating.rating_id,
    ));
  }

  let body = format!(
    "<p><a href=\"/ratings/add\">Add rating</a></p>\n\
     <table border=\"1\">\n\
     <tr><th>Movie</th><th>User</th><th>Rating</th><th>Comment</th><th>Date</th><th></th></tr>\n\
     {table_rows}</table>"
  );
  layout("Ratings", &body)
}

fn movie_options(movies: &[Movie], selected: Option<uuid::Uuid>) -> String {
  let mut out = String::new();
  for m in movies {
    let marker = if selected == Some(m.movie_id) { " selected" } else { "" };
    out.push_str(&format!(
      "<option value=\"{id}\"{marker}>{title}</option>\n",
      id = m.movie_id,
      title = escape(&m.title),
    ));
  }
  out
}

fn user_options(users: &[User], selected: Option<uuid::Uuid>) -> String {
  let mut out = String::new();
  for u in users {
    let marker = if selected == Some(u.user_id) { " selected" } else { "" };
    out.push_str(&format!(
      "<option value=\"{id}\"{marker}>{name}</option>\n",
      id = u.user_id,
      name = escape(&u.name),
    ));
  }
  out
}

/// Add form when `rating` is `None`, pre-filled edit form otherwise. The
/// movie and user lists fill the two select controls.
pub fn rating_form_page(
  action: &str,
  rating: Option<&Rating>,
  movies: &[Movie],
  users: &[User],
) -> String {
  let (value, comment) = match rating {
    Some(r) => (r.rating.to_string(), escape(&r.comment)),
    None => Default::default(),
  };

  let body = format!(
    "<form method=\"post\" action=\"{action}\">\n\
     <p><label>Movie <select name=\"movie_id\">\n{movie_opts}</select></label></p>\n\
     <p><label>User <select name=\"user_id\">\n{user_opts}</select></label></p>\n\
     <p><label>Rating <input name=\"rating\" value=\"{value}\" required></label></p>\n\
     <p><label>Comment <textarea name=\"comment\">{comment}</textarea></label></p>\n\
     <p><button type=\"submit\">Save</button></p>\n\
     </form>",
    action = escape(action),
    movie_opts = movie_options(movies, rating.map(|r| r.movie_id)),
    user_opts = user_options(users, rating.map(|r| r.user_id)),
  );
  let heading = if rating.is_some() { "Edit Rating" } else { "Add Rating" };
  layout(heading, &body)
}

// ─── Users ───────────────────────────────────────────────────────────────────

/// Password hashes are deliberately absent from the listing.
pub fn user_list_page(users: &[User]) -> String {
  let mut rows = String::new();
  for u in users {
    rows.push_str(&format!(
      "<tr><td>{name}</td><td>{email}</td>\
       <td><a href=\"/users/edit/{id}\">edit</a> \
       <a href=\"/users/delete/{id}\">delete</a></td></tr>\n",
      name = escape(&u.name),
      email = escape(&u.email),
      id = u.user_id,
    ));
  }

  let body = format!(
    "<p><a href=\"/users/add\">Add user</a></p>\n\
     <table border=\"1\">\n\
     <tr><th>Name</th><th>Email</th><th></th></tr>\n\
     {rows}</table>"
  );
  layout("Users", &body)
}

/// Add form when `user` is `None`, pre-filled edit form otherwise. The
/// password input is always blank; submitting re-hashes whatever is typed.
pub fn user_form_page(action: &str, user: Option<&User>) -> String {
  let (name, email) = match user {
    Some(u) => (escape(&u.name), escape(&u.email)),
    None => Default::default(),
  };

  let body = format!(
    "<form method=\"post\" action=\"{action}\">\n\
     <p><label>Name <input name=\"name\" value=\"{name}\" required></label></p>\n\
     <p><label>Email <input name=\"email\" value=\"{email}\" required></label></p>\n\
     <p><label>Password <input name=\"password\" type=\"password\" required></label></p>\n\
     <p><button type=\"submit\">Save</button></p>\n\
     </form>",
    action = escape(action),
  );
  let heading = if user.is_some() { "Edit User" } else { "Add User" };
  layout(heading, &body)
}
