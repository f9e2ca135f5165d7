use frameflicker_core::{AwardsInfo, EpisodeDetail, MovieDetail, SearchResult, SeasonDetail};
use tracing::debug;

use crate::{DetailsArtifact, MetadataError, popular};

/// Result of a lookup by title: the record plus its downloadable text form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleDetails {
    pub movie: MovieDetail,
    pub artifact: DetailsArtifact,
}

impl TitleDetails {
    pub fn new(movie: MovieDetail) -> Self {
        let artifact = DetailsArtifact::from_movie(&movie);
        Self { movie, artifact }
    }
}

/// A movie/TV metadata provider.
///
/// Every call is a single attempt. Lists are truncated to five entries in
/// provider order.
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn search_by_title(&self, title: &str) -> Result<Vec<SearchResult>, MetadataError>;

    async fn get_details_by_title(
        &self,
        title: &str,
        full_plot: bool,
    ) -> Result<TitleDetails, MetadataError>;

    async fn get_details_by_id(&self, imdb_id: &str) -> Result<MovieDetail, MetadataError>;

    async fn get_episode(
        &self,
        series_title: &str,
        season: &str,
        episode: &str,
    ) -> Result<EpisodeDetail, MetadataError>;

    /// Title search using the genre as query text.
    ///
    /// The provider has no genre filter, so results are only nominally
    /// related to the genre.
    async fn recommend_by_genre(&self, genre: &str) -> Result<Vec<SearchResult>, MetadataError>;

    async fn search_by_year(&self, year: &str) -> Result<Vec<SearchResult>, MetadataError>;

    async fn get_awards(&self, title: &str) -> Result<AwardsInfo, MetadataError>;

    async fn get_season_details(
        &self,
        series_title: &str,
        season: &str,
    ) -> Result<SeasonDetail, MetadataError>;

    /// Full-plot details for one of the curated popular titles.
    async fn get_random_popular_movie(&self) -> Result<MovieDetail, MetadataError> {
        let title = popular::pick_title(chrono::Utc::now());
        debug!(title, provider = self.name(), "picked popular title");
        self.get_details_by_title(title, true)
            .await
            .map(|details| details.movie)
    }
}
