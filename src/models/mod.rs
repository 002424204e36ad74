mod movie;
mod release_date;

pub use movie::{format_vote, MovieDetail, MovieId, MoviePage, MovieSummary};
pub use release_date::format_release_date;

use serde::{Deserialize, Deserializer};

/// Helper to deserialize a nullable field into its default value.
///
/// TMDB sends `null` for missing posters, backdrops and overviews.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
