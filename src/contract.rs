use crate::core::SummaryPayload;
use crate::error::{Result, YtSumError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

/// Envelope returned by the service on every answer, success or not
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub response: Value,
}

/// Shape of the `response` field, chosen up front by configuration. A body of
/// the other shape is a contract mismatch.
#[derive(
    EnumIter,
    Display,
    EnumString,
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    Default,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ContractVersion {
    /// One-element list, no sentence counts, may carry the transcript
    V1,
    /// Single object with optional sentence counts
    #[default]
    V2,
}

#[derive(Debug, Deserialize)]
struct ListEntry {
    processed_summary: String,
    length_original: u64,
    length_summary: u64,
    #[serde(default)]
    fetched_transcript: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ObjectPayload {
    processed_summary: String,
    length_original: u64,
    length_summary: u64,
    #[serde(default)]
    sentence_original: Option<u64>,
    #[serde(default)]
    sentence_summary: Option<u64>,
}

impl ContractVersion {
    /// Parse the `response` field of a successful envelope
    pub fn parse_payload(&self, response: Value) -> Result<SummaryPayload> {
        debug!(contract = %self, "parsing summary payload");
        match self {
            ContractVersion::V1 => {
                let entries: Vec<ListEntry> =
                    serde_json::from_value(response).map_err(|e| self.mismatch(e.to_string()))?;
                let [entry]: [ListEntry; 1] = entries.try_into().map_err(|v: Vec<ListEntry>| {
                    self.mismatch(format!("expected exactly one entry, got {}", v.len()))
                })?;

                let payload = SummaryPayload::new(
                    entry.processed_summary,
                    entry.length_original,
                    entry.length_summary,
                );
                Ok(match entry.fetched_transcript {
                    Some(transcript) => payload.with_transcript(transcript),
                    None => payload,
                })
            }
            ContractVersion::V2 => {
                let object: ObjectPayload =
                    serde_json::from_value(response).map_err(|e| self.mismatch(e.to_string()))?;

                let mut payload = SummaryPayload::new(
                    object.processed_summary,
                    object.length_original,
                    object.length_summary,
                );
                payload.original_sentences = object.sentence_original;
                payload.summary_sentences = object.sentence_summary;
                Ok(payload)
            }
        }
    }

    fn mismatch(&self, reason: String) -> YtSumError {
        YtSumError::ContractMismatch {
            version: self.to_string(),
            reason,
        }
    }
}
