use chrono::{DateTime, Utc};

/// Well-known films served by the random pick.
pub const POPULAR_TITLES: [&str; 12] = [
    "The Matrix",
    "Inception",
    "The Godfather",
    "Pulp Fiction",
    "Fight Club",
    "The Shawshank Redemption",
    "Forrest Gump",
    "The Dark Knight",
    "Titanic",
    "Avatar",
    "Interstellar",
    "Parasite",
];

/// Pick a curated title indexed by the millisecond clock.
pub fn pick_title(now: DateTime<Utc>) -> &'static str {
    let idx = now
        .timestamp_millis()
        .rem_euclid(POPULAR_TITLES.len() as i64);
    POPULAR_TITLES[idx as usize]
}
