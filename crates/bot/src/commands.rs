use teloxide::utils::command::BotCommands;

/// Chat commands. Arguments arrive as the raw text after the command and
/// are split by the handlers.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Frame Flicker commands:")]
pub enum Command {
    #[command(description = "show the command list")]
    Start,
    #[command(description = "<title> - search for movies")]
    Search(String),
    #[command(description = "<title> - get movie details")]
    Details(String),
    #[command(description = "<imdb_id> - get movie by IMDb ID")]
    Id(String),
    #[command(description = "<series> <season> <episode> - get series episode details")]
    Episode(String),
    #[command(description = "<genre> - get movie recommendations by genre")]
    Recommend(String),
    #[command(description = "<year> - search movies by year")]
    Year(String),
    #[command(description = "get a random popular movie")]
    Random,
    #[command(description = "<title> - get movie awards")]
    Awards(String),
    #[command(description = "<series> <season> - get season details")]
    Season(String),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Search(_) => "search",
            Self::Details(_) => "details",
            Self::Id(_) => "id",
            Self::Episode(_) => "episode",
            Self::Recommend(_) => "recommend",
            Self::Year(_) => "year",
            Self::Random => "random",
            Self::Awards(_) => "awards",
            Self::Season(_) => "season",
        }
    }
}
