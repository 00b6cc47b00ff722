use crate::core::{DownloadRecord, VIDEO_ID_LEN};
use crate::error::Result;
use std::path::{Path, PathBuf};

const FILENAME_PREFIX: &str = "script_";
const FILENAME_EXTENSION: &str = ".txt";
const DATA_URI_PREFIX: &str = "data:text/plain;charset=utf-8,";

/// Downloadable text file built from the last successful result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: String,
    /// Script text, percent-encoded for embedding in a data URI
    pub content: Vec<u8>,
}

impl Artifact {
    /// Build the artifact. An empty record yields an empty, well-formed file.
    pub fn build(record: &DownloadRecord) -> Self {
        let filename = format!(
            "{}{}_{}_{}{}",
            FILENAME_PREFIX,
            record.video_id,
            record.video_algo.replace('-', "_"),
            record.video_percent,
            FILENAME_EXTENSION
        );
        let content = urlencoding::encode(&record.script).into_owned().into_bytes();
        Self { filename, content }
    }

    pub fn data_uri(&self) -> String {
        format!("{}{}", DATA_URI_PREFIX, String::from_utf8_lossy(&self.content))
    }

    /// Original script text
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&urlencoding::decode_binary(&self.content)).into_owned()
    }

    /// Write the plain script text into `dir` under a sanitized filename
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(sanitize_filename::sanitize(&self.filename));
        std::fs::write(&path, self.text())?;
        Ok(path)
    }
}

/// Fields recovered from an artifact filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactName {
    pub video_id: String,
    pub video_algo: String,
    pub video_percent: String,
}

/// Parse `script_<id>_<algo>_<percent>.txt` back into its parts.
///
/// The video id is taken by its fixed length, so ids containing `_` survive.
pub fn parse_filename(filename: &str) -> Option<ArtifactName> {
    let stem = filename
        .strip_prefix(FILENAME_PREFIX)?
        .strip_suffix(FILENAME_EXTENSION)?;

    let video_id = stem.get(..VIDEO_ID_LEN)?;
    let rest = stem.get(VIDEO_ID_LEN..)?;
    let (video_algo, video_percent) = rest.strip_prefix('_')?.rsplit_once('_')?;

    Some(ArtifactName {
        video_id: video_id.to_string(),
        video_algo: video_algo.to_string(),
        video_percent: video_percent.to_string(),
    })
}
