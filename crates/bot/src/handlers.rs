//! Translation between chat commands and provider calls.
//!
//! Nothing here talks to Telegram: [`handle`] returns a [`Reply`] that the
//! dispatcher delivers.

use frameflicker_metadata::{DetailsArtifact, MetadataError, MetadataProvider};
use tracing::debug;

use crate::args;
use crate::commands::Command;
use crate::render;

pub const SEARCH_USAGE: &str = "Please provide a movie title! Example: /search Matrix";
pub const DETAILS_USAGE: &str = "Please provide a movie title! Example: /details The Matrix";
pub const ID_USAGE: &str = "Please provide an IMDb ID! Example: /id tt0133093";
pub const EPISODE_USAGE: &str =
    "Please provide series, season, and episode! Example: /episode Breaking Bad 1 1";
pub const RECOMMEND_USAGE: &str = "Please provide a genre! Example: /recommend Sci-Fi";
pub const YEAR_USAGE: &str = "Please provide a year! Example: /year 1999";
pub const AWARDS_USAGE: &str = "Please provide a movie title! Example: /awards The Godfather";
pub const SEASON_USAGE: &str =
    "Please provide series and season! Example: /season Breaking Bad 1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Sent without markup: usage hints, provider and transport errors.
    Plain(String),
    Html(String),
    /// HTML text followed by a document upload.
    HtmlWithDocument {
        text: String,
        document: DetailsArtifact,
        caption: String,
    },
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Html(text) | Self::HtmlWithDocument { text, .. } => text,
        }
    }
}

fn usage(command: &Command, hint: &str) -> Reply {
    debug!(command = command.name(), "missing arguments");
    Reply::Plain(hint.to_string())
}

fn html_or_error<T>(result: Result<T, MetadataError>, render: impl FnOnce(&T) -> String) -> Reply {
    match result {
        Ok(value) => Reply::Html(render(&value)),
        Err(e) => Reply::Plain(e.to_string()),
    }
}

/// Run one command against the provider. Never fails: errors become replies.
pub async fn handle(command: Command, provider: &dyn MetadataProvider) -> Reply {
    match &command {
        Command::Start => Reply::Plain(render::WELCOME.to_string()),

        Command::Search(raw) => {
            let Some(title) = args::joined(raw) else {
                return usage(&command, SEARCH_USAGE);
            };
            html_or_error(provider.search_by_title(&title).await, |r| {
                render::search_results(r)
            })
        }

        Command::Details(raw) => {
            let Some(title) = args::joined(raw) else {
                return usage(&command, DETAILS_USAGE);
            };
            match provider.get_details_by_title(&title, true).await {
                Ok(details) => Reply::HtmlWithDocument {
                    text: render::movie_detail(&details.movie),
                    caption: render::details_caption(&details.movie),
                    document: details.artifact,
                },
                Err(e) => Reply::Plain(e.to_string()),
            }
        }

        Command::Id(raw) => {
            let Some(imdb_id) = args::first(raw) else {
                return usage(&command, ID_USAGE);
            };
            html_or_error(provider.get_details_by_id(imdb_id).await, render::movie_detail)
        }

        Command::Episode(raw) => {
            let Some((series, [season, episode])) = args::title_and_trailing::<2>(raw) else {
                return usage(&command, EPISODE_USAGE);
            };
            html_or_error(
                provider.get_episode(&series, season, episode).await,
                render::episode,
            )
        }

        Command::Recommend(raw) => {
            let Some(genre) = args::joined(raw) else {
                return usage(&command, RECOMMEND_USAGE);
            };
            html_or_error(provider.recommend_by_genre(&genre).await, |r| {
                render::recommendations(&genre, r)
            })
        }

        Command::Year(raw) => {
            let Some(year) = args::first(raw) else {
                return usage(&command, YEAR_USAGE);
            };
            html_or_error(provider.search_by_year(year).await, |r| {
                render::movies_from_year(year, r)
            })
        }

        Command::Random => html_or_error(
            provider.get_random_popular_movie().await,
            render::random_movie,
        ),

        Command::Awards(raw) => {
            let Some(title) = args::joined(raw) else {
                return usage(&command, AWARDS_USAGE);
            };
            html_or_error(provider.get_awards(&title).await, render::awards)
        }

        Command::Season(raw) => {
            let Some((series, [season])) = args::title_and_trailing::<1>(raw) else {
                return usage(&command, SEASON_USAGE);
            };
            html_or_error(
                provider.get_season_details(&series, season).await,
                render::season,
            )
        }
    }
}
