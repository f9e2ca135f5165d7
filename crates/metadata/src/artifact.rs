//! Downloadable text form of a movie lookup.
//!
//! The artifact lives in memory and is only written to disk when a caller
//! asks for it with [`DetailsArtifact::persist`].

use std::path::{Path, PathBuf};

use frameflicker_core::MovieDetail;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsArtifact {
    file_name: String,
    contents: Vec<u8>,
}

impl DetailsArtifact {
    /// Render the ten detail fields as `Label: value` lines.
    pub fn from_movie(movie: &MovieDetail) -> Self {
        let mut text = String::new();
        for (label, value) in movie.labeled_fields() {
            text.push_str(label);
            text.push_str(": ");
            text.push_str(value);
            text.push('\n');
        }

        Self {
            file_name: file_name_for(&movie.title),
            contents: text.into_bytes(),
        }
    }

    /// `<title>.txt`, with characters that are invalid in file names removed.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.contents
    }

    /// Write the artifact into `dir`, replacing any file of the same name.
    pub async fn persist(&self, dir: &Path) -> std::io::Result<PathBuf> {
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(&self.file_name);
        tokio::fs::write(&path, &self.contents).await?;
        debug!(path = %path.display(), "artifact written");
        Ok(path)
    }
}

fn file_name_for(title: &str) -> String {
    let name = sanitize_filename::sanitize(format!("{title}.txt"));
    if name == ".txt" || name.is_empty() {
        "details.txt".to_string()
    } else {
        name
    }
}
