//! Join-at-read-time resolution of rating references to display labels.
//!
//! `Rating.movie_id` and `Rating.user_id` are soft references, so the
//! listing page resolves them here, degrading gracefully to a placeholder
//! label when the target record no longer exists. A dangling reference is
//! never an error.

use std::collections::HashMap;

use cinelog_core::{record::Rating, store::CatalogStore};

/// Shown when a rating's movie has been deleted.
pub const MISSING_MOVIE_LABEL: &str = "Не знайдено";
/// Shown when a rating's user has been deleted.
pub const ANONYMOUS_USER_LABEL: &str = "Анонім";

/// A rating with its references resolved for display.
#[derive(Debug, Clone)]
pub struct RatingRow {
  pub rating:      Rating,
  pub movie_title: String,
  pub user_name:   String,
}

/// Resolve every rating's movie and user labels in one pass.
///
/// Fetches both collections once and joins in memory rather than issuing a
/// lookup per rating.
pub async fn resolve_rating_rows<S>(
  store: &S,
  ratings: Vec<Rating>,
) -> Result<Vec<RatingRow>, S::Error>
where
  S: CatalogStore,
{
  let movie_titles: HashMap<_, _> = store
    .list_movies()
    .await?
    .into_iter()
    .map(|m| (m.movie_id, m.title))
    .collect();

  let user_names: HashMap<_, _> = store
    .list_users()
    .await?
    .into_iter()
    .map(|u| (u.user_id, u.name))
    .collect();

  let rows = ratings
    .into_iter()
    .map(|rating| {
      let movie_title = movie_titles
        .get(&rating.movie_id)
        .cloned()
        .unwrap_or_else(|| MISSING_MOVIE_LABEL.to_string());
      let user_name = user_names
        .get(&rating.user_id)
        .cloned()
        .unwrap_or_else(|| ANONYMOUS_USER_LABEL.to_string());
      RatingRow { rating, movie_title, user_name }
    })
    .collect();

  Ok(rows)
}
