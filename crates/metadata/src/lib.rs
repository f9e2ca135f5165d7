pub mod artifact;
pub mod omdb;
pub mod popular;
pub mod provider;

use thiserror::Error;

pub use artifact::DetailsArtifact;
pub use omdb::{OmdbClient, OmdbConfig};
pub use provider::{MetadataProvider, TitleDetails};

/// Failure of a single provider call.
///
/// The `Display` form is what ends up in the chat reply, so provider
/// messages are rendered without any prefix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    /// The provider answered with `"Response": "False"`.
    #[error("{0}")]
    Provider(String),
    /// Connection failure, timeout, non-2xx status or an undecodable body.
    #[error("network error: {0}")]
    Transport(String),
}
