use serde::{Deserialize, Serialize};

/// Substituted for any field the provider leaves out.
pub const PLACEHOLDER: &str = "N/A";

/// One entry of a title, genre or year search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub year: String,
    pub imdb_id: String,
}

/// Full movie record from a lookup by title or IMDb id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub title: String,
    pub year: String,
    pub released: String,
    pub genre: String,
    pub director: String,
    pub actors: String,
    pub plot: String,
    pub imdb_rating: String,
    pub runtime: String,
    pub imdb_id: String,
}

impl MovieDetail {
    /// The ten fields paired with their display labels, in display order.
    pub fn labeled_fields(&self) -> [(&'static str, &str); 10] {
        [
            ("Title", &self.title),
            ("Year", &self.year),
            ("Released", &self.released),
            ("Genre", &self.genre),
            ("Director", &self.director),
            ("Actors", &self.actors),
            ("Plot", &self.plot),
            ("IMDb Rating", &self.imdb_rating),
            ("Runtime", &self.runtime),
            ("IMDb ID", &self.imdb_id),
        ]
    }
}

/// A single episode of a series.
///
/// `series_title` is the title the caller asked for, not the provider's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeDetail {
    pub series_title: String,
    pub season: String,
    pub episode: String,
    pub title: String,
    pub released: String,
    pub plot: String,
    pub imdb_rating: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonEpisode {
    pub episode: String,
    pub title: String,
    pub imdb_rating: String,
}

/// A season overview with at most five episodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonDetail {
    pub series_title: String,
    pub season: String,
    pub total_seasons: String,
    pub episodes: Vec<SeasonEpisode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardsInfo {
    pub title: String,
    pub awards: String,
}
