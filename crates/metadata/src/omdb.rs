//! OMDb (Open Movie Database) provider client.
//!
//! All lookups hit one endpoint; the query parameters (`s`, `t`, `i`) select
//! the mode. Responses carry `"Response": "True" | "False"` and an `Error`
//! message on failure.

use std::time::Duration;

use frameflicker_core::{
    AwardsInfo, EpisodeDetail, MovieDetail, PLACEHOLDER, SearchResult, SeasonDetail,
    SeasonEpisode,
};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::MetadataError;
use crate::provider::{MetadataProvider, TitleDetails};

pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Max entries kept from any list the provider returns.
const MAX_RESULTS: usize = 5;

#[derive(Debug, Clone)]
pub struct OmdbConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl OmdbConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub struct OmdbClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl OmdbClient {
    pub fn new(config: OmdbConfig) -> Result<Self, MetadataError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MetadataError::Transport(e.to_string()))?;

        Ok(Self {
            api_key: config.api_key,
            base_url: config.base_url,
            client,
        })
    }

    /// Perform one GET and return the payload of a successful envelope.
    async fn get_json(&self, params: &[(&str, &str)]) -> Result<Value, MetadataError> {
        debug!(url = %self.base_url, ?params, "OMDb request");

        let resp = self
            .client
            .get(&self.base_url)
            .query(params)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(transport_error)?;

        let data: Value = resp.json().await.map_err(transport_error)?;
        check_envelope(data)
    }

    async fn search(
        &self,
        params: &[(&str, &str)],
        what: &str,
    ) -> Result<Vec<SearchResult>, MetadataError> {
        let data = self
            .get_json(params)
            .await
            .inspect_err(|e| log_failure(what, e))?;
        let results = parse_search_results(&data);
        info!(
            total = data["Search"].as_array().map_or(0, Vec::len),
            returned = results.len(),
            query = what,
            "OMDb search"
        );
        Ok(results)
    }
}

// The request URL carries the API key, so it never goes into error text.
fn transport_error(e: reqwest::Error) -> MetadataError {
    MetadataError::Transport(e.without_url().to_string())
}

fn log_failure(what: &str, e: &MetadataError) {
    match e {
        MetadataError::Provider(msg) => warn!(query = what, error = %msg, "OMDb lookup failed"),
        MetadataError::Transport(msg) => error!(query = what, error = %msg, "OMDb request failed"),
    }
}

/// Split a decoded body into the payload or the provider's error message.
pub fn check_envelope(data: Value) -> Result<Value, MetadataError> {
    if data["Response"].as_str() == Some("True") {
        Ok(data)
    } else {
        Err(provider_error(&data))
    }
}

fn provider_error(data: &Value) -> MetadataError {
    MetadataError::Provider(
        data["Error"]
            .as_str()
            .unwrap_or("Unknown error")
            .to_string(),
    )
}

/// Field as a string, or the placeholder when absent.
fn field(data: &Value, key: &str) -> String {
    data[key].as_str().unwrap_or(PLACEHOLDER).to_string()
}

pub fn parse_search_results(data: &Value) -> Vec<SearchResult> {
    data["Search"]
        .as_array()
        .map(|results| {
            results
                .iter()
                .take(MAX_RESULTS)
                .map(|r| SearchResult {
                    title: field(r, "Title"),
                    year: field(r, "Year"),
                    imdb_id: field(r, "imdbID"),
                })
                .collect()
        })
        .unwrap_or_default()
}

pub fn parse_movie_detail(data: &Value) -> MovieDetail {
    MovieDetail {
        title: field(data, "Title"),
        year: field(data, "Year"),
        released: field(data, "Released"),
        genre: field(data, "Genre"),
        director: field(data, "Director"),
        actors: field(data, "Actors"),
        plot: field(data, "Plot"),
        imdb_rating: field(data, "imdbRating"),
        runtime: field(data, "Runtime"),
        imdb_id: field(data, "imdbID"),
    }
}

pub fn parse_episode_detail(data: &Value, series_title: &str) -> EpisodeDetail {
    EpisodeDetail {
        series_title: series_title.to_string(),
        season: field(data, "Season"),
        episode: field(data, "Episode"),
        title: field(data, "Title"),
        released: field(data, "Released"),
        plot: field(data, "Plot"),
        imdb_rating: field(data, "imdbRating"),
    }
}

/// A season payload must carry an `Episodes` array even when the envelope
/// reports success.
pub fn parse_season_detail(
    data: &Value,
    series_title: &str,
) -> Result<SeasonDetail, MetadataError> {
    let episodes = data["Episodes"]
        .as_array()
        .ok_or_else(|| provider_error(data))?;

    Ok(SeasonDetail {
        series_title: series_title.to_string(),
        season: field(data, "Season"),
        total_seasons: field(data, "totalSeasons"),
        episodes: episodes
            .iter()
            .take(MAX_RESULTS)
            .map(|ep| SeasonEpisode {
                episode: field(ep, "Episode"),
                title: field(ep, "Title"),
                imdb_rating: field(ep, "imdbRating"),
            })
            .collect(),
    })
}

pub fn parse_awards(data: &Value) -> AwardsInfo {
    AwardsInfo {
        title: field(data, "Title"),
        awards: field(data, "Awards"),
    }
}

#[async_trait::async_trait]
impl MetadataProvider for OmdbClient {
    fn name(&self) -> &str {
        "omdb"
    }

    async fn search_by_title(&self, title: &str) -> Result<Vec<SearchResult>, MetadataError> {
        self.search(&[("s", title), ("type", "movie")], title).await
    }

    async fn get_details_by_title(
        &self,
        title: &str,
        full_plot: bool,
    ) -> Result<TitleDetails, MetadataError> {
        let plot = if full_plot { "full" } else { "short" };
        let data = self
            .get_json(&[("t", title), ("plot", plot)])
            .await
            .inspect_err(|e| log_failure(title, e))?;

        info!(title, "fetched movie details");
        Ok(TitleDetails::new(parse_movie_detail(&data)))
    }

    async fn get_details_by_id(&self, imdb_id: &str) -> Result<MovieDetail, MetadataError> {
        let data = self
            .get_json(&[("i", imdb_id)])
            .await
            .inspect_err(|e| log_failure(imdb_id, e))?;

        info!(imdb_id, "fetched movie details by id");
        Ok(parse_movie_detail(&data))
    }

    async fn get_episode(
        &self,
        series_title: &str,
        season: &str,
        episode: &str,
    ) -> Result<EpisodeDetail, MetadataError> {
        let data = self
            .get_json(&[("t", series_title), ("Season", season), ("Episode", episode)])
            .await
            .inspect_err(|e| log_failure(series_title, e))?;

        info!(series_title, season, episode, "fetched episode");
        Ok(parse_episode_detail(&data, series_title))
    }

    async fn recommend_by_genre(&self, genre: &str) -> Result<Vec<SearchResult>, MetadataError> {
        self.search(&[("s", genre), ("type", "movie")], genre).await
    }

    async fn search_by_year(&self, year: &str) -> Result<Vec<SearchResult>, MetadataError> {
        self.search(&[("s", "movie"), ("type", "movie"), ("y", year)], year)
            .await
    }

    async fn get_awards(&self, title: &str) -> Result<AwardsInfo, MetadataError> {
        let data = self
            .get_json(&[("t", title)])
            .await
            .inspect_err(|e| log_failure(title, e))?;

        Ok(parse_awards(&data))
    }

    async fn get_season_details(
        &self,
        series_title: &str,
        season: &str,
    ) -> Result<SeasonDetail, MetadataError> {
        let season_detail = self
            .get_json(&[("t", series_title), ("Season", season)])
            .await
            .and_then(|data| parse_season_detail(&data, series_title))
            .inspect_err(|e| log_failure(series_title, e))?;

        info!(series_title, season, "fetched season details");
        Ok(season_detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_movie_detail_from_json() {
        let json = serde_json::json!({
            "Title": "The Matrix",
            "Year": "1999",
            "Released": "31 Mar 1999",
            "Runtime": "136 min",
            "Genre": "Action, Sci-Fi",
            "Director": "Lana Wachowski, Lilly Wachowski",
            "Actors": "Keanu Reeves, Laurence Fishburne",
            "Plot": "When a beautiful stranger leads computer hacker Neo...",
            "imdbRating": "8.7",
            "imdbID": "tt0133093",
            "Response": "True"
        });

        let movie = parse_movie_detail(&json);
        assert_eq!(movie.title, "The Matrix");
        assert_eq!(movie.year, "1999");
        assert_eq!(movie.released, "31 Mar 1999");
        assert_eq!(movie.genre, "Action, Sci-Fi");
        assert_eq!(movie.director, "Lana Wachowski, Lilly Wachowski");
        assert_eq!(movie.actors, "Keanu Reeves, Laurence Fishburne");
        assert!(movie.plot.starts_with("When a beautiful stranger"));
        assert_eq!(movie.imdb_rating, "8.7");
        assert_eq!(movie.runtime, "136 min");
        assert_eq!(movie.imdb_id, "tt0133093");
    }

    #[test]
    fn missing_fields_become_placeholder() {
        let json = serde_json::json!({ "Title": "Obscure", "Response": "True" });

        let movie = parse_movie_detail(&json);
        assert_eq!(movie.title, "Obscure");
        assert_eq!(movie.director, PLACEHOLDER);
        assert_eq!(movie.imdb_id, PLACEHOLDER);

        let awards = parse_awards(&json);
        assert_eq!(awards.awards, PLACEHOLDER);
    }

    #[test]
    fn search_results_truncate_in_provider_order() {
        let hits: Vec<Value> = (1..=8)
            .map(|i| {
                serde_json::json!({
                    "Title": format!("Movie {i}"),
                    "Year": format!("200{i}"),
                    "imdbID": format!("tt000000{i}")
                })
            })
            .collect();
        let json = serde_json::json!({ "Search": hits, "Response": "True" });

        let results = parse_search_results(&json);
        assert_eq!(results.len(), 5);
        let titles: Vec<_> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Movie 1", "Movie 2", "Movie 3", "Movie 4", "Movie 5"]);
        assert_eq!(results[4].imdb_id, "tt0000005");
    }

    #[test]
    fn failure_envelope_carries_provider_message() {
        let json = serde_json::json!({ "Response": "False", "Error": "Movie not found!" });
        assert_eq!(
            check_envelope(json),
            Err(MetadataError::Provider("Movie not found!".into()))
        );

        let json = serde_json::json!({ "Response": "False" });
        assert_eq!(
            check_envelope(json).unwrap_err().to_string(),
            "Unknown error"
        );
    }

    #[test]
    fn season_without_episodes_is_an_error() {
        let json = serde_json::json!({ "Title": "Breaking Bad", "Response": "True" });
        assert_eq!(
            parse_season_detail(&json, "Breaking Bad"),
            Err(MetadataError::Provider("Unknown error".into()))
        );
    }

    #[test]
    fn parse_season_detail_from_json() {
        let episodes: Vec<Value> = (1..=7)
            .map(|i| {
                serde_json::json!({
                    "Title": format!("Episode {i}"),
                    "Episode": i.to_string(),
                    "imdbRating": "8.5"
                })
            })
            .collect();
        let json = serde_json::json!({
            "Title": "Breaking Bad",
            "Season": "1",
            "totalSeasons": "5",
            "Episodes": episodes,
            "Response": "True"
        });

        let season = parse_season_detail(&json, "breaking bad").unwrap();
        assert_eq!(season.series_title, "breaking bad");
        assert_eq!(season.season, "1");
        assert_eq!(season.total_seasons, "5");
        assert_eq!(season.episodes.len(), 5);
        assert_eq!(season.episodes[0].episode, "1");
        assert_eq!(season.episodes[4].title, "Episode 5");
    }

    #[test]
    fn parse_episode_keeps_requested_series_title() {
        let json = serde_json::json!({
            "Title": "Pilot",
            "Season": "1",
            "Episode": "1",
            "Released": "20 Jan 2008",
            "Plot": "A chemistry teacher turns to crime.",
            "imdbRating": "9.0",
            "Response": "True"
        });

        let ep = parse_episode_detail(&json, "Breaking Bad");
        assert_eq!(ep.series_title, "Breaking Bad");
        assert_eq!(ep.title, "Pilot");
        assert_eq!(ep.released, "20 Jan 2008");
        assert_eq!(ep.imdb_rating, "9.0");
    }
}
