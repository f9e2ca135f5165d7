//! Reply templates. Output is Telegram HTML; every provider value is escaped.

use frameflicker_core::{AwardsInfo, EpisodeDetail, MovieDetail, SearchResult, SeasonDetail};
use teloxide::utils::html::escape;

pub const WELCOME: &str = "Welcome to the Frame Flicker Bot! Use these commands:\n\
/search <title> - Search for movies\n\
/details <title> - Get movie details\n\
/id <imdb_id> - Get movie by IMDb ID\n\
/episode <series> <season> <episode> - Get series episode details\n\
/recommend <genre> - Get movie recommendations by genre\n\
/year <year> - Search movies by year\n\
/random - Get a random popular movie\n\
/awards <title> - Get movie awards\n\
/season <series> <season> - Get season details";

fn labeled(label: &str, value: &str) -> String {
    format!("<b>{label}</b>: {}", escape(value))
}

fn result_line(r: &SearchResult) -> String {
    format!(
        "- {} ({}) - {}",
        escape(&r.title),
        escape(&r.year),
        escape(&r.imdb_id)
    )
}

pub fn search_results(results: &[SearchResult]) -> String {
    let lines: Vec<String> = results.iter().map(result_line).collect();
    format!("Search Results:\n\n{}", lines.join("\n\n"))
}

pub fn recommendations(genre: &str, results: &[SearchResult]) -> String {
    let lines: Vec<String> = results.iter().map(result_line).collect();
    format!(
        "Recommendations for '{}':\n{}",
        escape(genre),
        lines.join("\n")
    )
}

pub fn movies_from_year(year: &str, results: &[SearchResult]) -> String {
    let lines: Vec<String> = results.iter().map(result_line).collect();
    format!("Movies from {}:\n{}", escape(year), lines.join("\n"))
}

pub fn movie_detail(movie: &MovieDetail) -> String {
    movie
        .labeled_fields()
        .iter()
        .map(|(label, value)| labeled(label, value))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn random_movie(movie: &MovieDetail) -> String {
    format!("<b>Random Popular Movie</b>\n{}", movie_detail(movie))
}

pub fn episode(ep: &EpisodeDetail) -> String {
    [
        labeled("Series", &ep.series_title),
        labeled("Season", &ep.season),
        labeled("Episode", &format!("{} - {}", ep.episode, ep.title)),
        labeled("Released", &ep.released),
        labeled("Plot", &ep.plot),
        labeled("IMDb Rating", &ep.imdb_rating),
    ]
    .join("\n")
}

pub fn awards(info: &AwardsInfo) -> String {
    format!(
        "<b>Awards for {}</b>\n{}",
        escape(&info.title),
        labeled("Awards", &info.awards)
    )
}

pub fn season(season: &SeasonDetail) -> String {
    let mut lines = vec![
        labeled("Series", &season.series_title),
        labeled("Season", &season.season),
        labeled("Total Seasons", &season.total_seasons),
        "<b>Episodes</b>:".to_string(),
    ];
    lines.extend(season.episodes.iter().map(|ep| {
        format!(
            "- Ep {}: {} (IMDb: {})",
            escape(&ep.episode),
            escape(&ep.title),
            escape(&ep.imdb_rating)
        )
    }));
    lines.join("\n")
}

pub fn details_caption(movie: &MovieDetail) -> String {
    format!("Details for '{}'", movie.title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use frameflicker_core::{PLACEHOLDER, SeasonEpisode};

    fn hit(title: &str, year: &str, id: &str) -> SearchResult {
        SearchResult {
            title: title.into(),
            year: year.into(),
            imdb_id: id.into(),
        }
    }

    #[test]
    fn search_results_one_entry_per_block() {
        let text = search_results(&[
            hit("The Matrix", "1999", "tt0133093"),
            hit("The Matrix Reloaded", "2003", "tt0234215"),
        ]);
        assert_eq!(
            text,
            "Search Results:\n\n- The Matrix (1999) - tt0133093\n\n- The Matrix Reloaded (2003) - tt0234215"
        );
    }

    #[test]
    fn list_templates_have_headers() {
        let hits = [hit("Alien", "1979", "tt0078748")];
        assert_eq!(
            recommendations("Sci-Fi", &hits),
            "Recommendations for 'Sci-Fi':\n- Alien (1979) - tt0078748"
        );
        assert_eq!(
            movies_from_year("1979", &hits),
            "Movies from 1979:\n- Alien (1979) - tt0078748"
        );
    }

    #[test]
    fn values_are_html_escaped() {
        let info = AwardsInfo {
            title: "Tom & Jerry".into(),
            awards: "<none>".into(),
        };
        assert_eq!(
            awards(&info),
            "<b>Awards for Tom &amp; Jerry</b>\n<b>Awards</b>: &lt;none&gt;"
        );
    }

    #[test]
    fn placeholder_is_rendered_as_is() {
        let movie = MovieDetail {
            title: "Obscure".into(),
            year: PLACEHOLDER.into(),
            released: PLACEHOLDER.into(),
            genre: PLACEHOLDER.into(),
            director: PLACEHOLDER.into(),
            actors: PLACEHOLDER.into(),
            plot: PLACEHOLDER.into(),
            imdb_rating: PLACEHOLDER.into(),
            runtime: PLACEHOLDER.into(),
            imdb_id: PLACEHOLDER.into(),
        };
        let text = movie_detail(&movie);
        assert_eq!(text.lines().count(), 10);
        assert!(text.contains("<b>Director</b>: N/A"));
        assert!(random_movie(&movie).starts_with("<b>Random Popular Movie</b>\n<b>Title</b>: Obscure"));
    }

    #[test]
    fn season_lists_episodes() {
        let s = SeasonDetail {
            series_title: "Breaking Bad".into(),
            season: "1".into(),
            total_seasons: "5".into(),
            episodes: vec![SeasonEpisode {
                episode: "1".into(),
                title: "Pilot".into(),
                imdb_rating: "9.0".into(),
            }],
        };
        assert_eq!(
            season(&s),
            "<b>Series</b>: Breaking Bad\n<b>Season</b>: 1\n<b>Total Seasons</b>: 5\n<b>Episodes</b>:\n- Ep 1: Pilot (IMDb: 9.0)"
        );
    }
}
