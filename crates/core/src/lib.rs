pub mod types;

pub use types::{
    AwardsInfo, EpisodeDetail, MovieDetail, PLACEHOLDER, SearchResult, SeasonDetail,
    SeasonEpisode,
};
