use crate::error::{Result, YtSumError};
use serde::{Deserialize, Serialize};
use std::fmt;
pub use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Length of a canonical YouTube video identifier
pub const VIDEO_ID_LEN: usize = 11;

/// Canonical 11-character video identifier extracted from a URL
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoReference(String);

impl VideoReference {
    /// Wrap a candidate identifier. Only the length in bytes is checked.
    pub fn new(candidate: &str) -> Option<Self> {
        (candidate.len() == VIDEO_ID_LEN).then(|| Self(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Summarization algorithms offered by the service, in dropdown order
#[derive(
    EnumIter,
    Display,
    EnumString,
    AsRefStr,
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
)]
pub enum Algorithm {
    #[strum(serialize = "gensim-sum")]
    #[serde(rename = "gensim-sum")]
    Gensim,
    #[strum(serialize = "nltk-sum")]
    #[serde(rename = "nltk-sum")]
    Nltk,
    #[strum(serialize = "spacy-sum")]
    #[serde(rename = "spacy-sum")]
    Spacy,
    #[strum(serialize = "sumy-lsa-sum")]
    #[serde(rename = "sumy-lsa-sum")]
    SumyLsa,
    #[strum(serialize = "sumy-luhn-sum")]
    #[serde(rename = "sumy-luhn-sum")]
    SumyLuhn,
    #[strum(serialize = "sumy-text-rank-sum")]
    #[serde(rename = "sumy-text-rank-sum")]
    SumyTextRank,
}

impl Algorithm {
    /// Map a dropdown position to an algorithm. Position 0 is the placeholder.
    pub fn from_position(position: usize) -> Option<Self> {
        Self::iter().nth(position.checked_sub(1)?)
    }

    /// Dropdown position of this algorithm (1-based)
    pub fn position(&self) -> usize {
        Self::iter().position(|a| a == *self).map_or(0, |i| i + 1)
    }

    /// Wire code sent to the service
    pub fn code(&self) -> &'static str {
        match self {
            Algorithm::Gensim => "gensim-sum",
            Algorithm::Nltk => "nltk-sum",
            Algorithm::Spacy => "spacy-sum",
            Algorithm::SumyLsa => "sumy-lsa-sum",
            Algorithm::SumyLuhn => "sumy-luhn-sum",
            Algorithm::SumyTextRank => "sumy-text-rank-sum",
        }
    }

    /// Code with separators replaced by underscores, safe for filenames
    pub fn normalized(&self) -> String {
        self.code().replace('-', "_")
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Gensim => "TextRank based summary (Gensim)",
            Algorithm::Nltk => "Word frequency based summary (NLTK)",
            Algorithm::Spacy => "Word frequency based summary (spaCy)",
            Algorithm::SumyLsa => "Latent Semantic Analysis summary (Sumy)",
            Algorithm::SumyLuhn => "Luhn TF-IDF based summary (Sumy)",
            Algorithm::SumyTextRank => "TextRank based summary (Sumy)",
        }
    }
}

/// Desired summary length ratio: a multiple of 5 in [5, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    pub const STEP: u8 = 5;
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Result<Self> {
        if value >= Self::STEP && value <= Self::MAX && value % Self::STEP == 0 {
            Ok(Self(value))
        } else {
            Err(YtSumError::InvalidPercentage(value.to_string()))
        }
    }

    /// Parse a dropdown label such as `"20%"`
    pub fn from_label(label: &str) -> Result<Self> {
        let number = label.split('%').next().unwrap_or_default().trim();
        let value = number
            .parse::<u8>()
            .map_err(|_| YtSumError::InvalidPercentage(label.to_string()))?;
        Self::new(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> String {
        format!("{}%", self.0)
    }

    /// Every offered percentage, ascending
    pub fn all() -> impl Iterator<Item = Percentage> {
        (1..=Self::MAX / Self::STEP).map(|i| Percentage(i * Self::STEP))
    }
}

impl TryFrom<u8> for Percentage {
    type Error = YtSumError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(p: Percentage) -> Self {
        p.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One validated submission. Every field is valid by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRequest {
    video: VideoReference,
    percentage: Percentage,
    algorithm: Algorithm,
}

impl SummaryRequest {
    pub fn new(video: VideoReference, percentage: Percentage, algorithm: Algorithm) -> Self {
        Self {
            video,
            percentage,
            algorithm,
        }
    }

    pub fn video(&self) -> &VideoReference {
        &self.video
    }

    pub fn percentage(&self) -> Percentage {
        self.percentage
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Query parameters in the order the service documents them
    pub fn query_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("id", self.video.to_string()),
            ("percent", self.percentage.to_string()),
            ("choice", self.algorithm.code().to_string()),
        ]
    }
}

/// Result payload of a successful summarization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryPayload {
    pub summary: String,
    pub original_length: u64,
    pub summary_length: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_sentences: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_sentences: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
}

impl SummaryPayload {
    pub fn new(summary: String, original_length: u64, summary_length: u64) -> Self {
        Self {
            summary,
            original_length,
            summary_length,
            original_sentences: None,
            summary_sentences: None,
            transcript: None,
        }
    }

    /// Set sentence counts
    pub fn with_sentences(mut self, original: u64, summary: u64) -> Self {
        self.original_sentences = Some(original);
        self.summary_sentences = Some(summary);
        self
    }

    /// Set the fetched transcript
    pub fn with_transcript(mut self, transcript: String) -> Self {
        self.transcript = Some(transcript);
        self
    }
}

/// Classified result of one summarization attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    Success {
        message: String,
        payload: SummaryPayload,
    },
    Failure {
        message: String,
    },
    TransportError {
        message: String,
    },
}

impl SummaryOutcome {
    /// Short diagnostic shown in the status region
    pub fn message(&self) -> &str {
        match self {
            SummaryOutcome::Success { message, .. }
            | SummaryOutcome::Failure { message }
            | SummaryOutcome::TransportError { message } => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SummaryOutcome::Success { .. })
    }
}

/// Last successful result, kept for on-demand export
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRecord {
    pub script: String,
    pub video_id: String,
    pub video_algo: String,
    pub video_percent: String,
}

impl DownloadRecord {
    /// Overwrite the record with a new successful result
    pub fn update(&mut self, request: &SummaryRequest, payload: &SummaryPayload) {
        self.script = payload.summary.clone();
        self.video_id = request.video().to_string();
        self.video_algo = request.algorithm().normalized();
        self.video_percent = request.percentage().to_string();
    }

    /// True until the first successful result is recorded
    pub fn is_empty(&self) -> bool {
        self.video_id.is_empty()
    }
}
