use serde::Deserialize;

/// Full text recovered from a completed recognition job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    text: String,
}

#[derive(Deserialize)]
struct TranscriptDocument {
    results: TranscriptResults,
}

#[derive(Deserialize)]
struct TranscriptResults {
    transcripts: Vec<TranscriptAlternative>,
}

#[derive(Deserialize)]
struct TranscriptAlternative {
    transcript: String,
}

impl Transcript {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Parses the object written by the recognition service.
    ///
    /// Accepts the service's JSON transcript document and falls back to plain
    /// UTF-8 text for anything else.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TranscriptError> {
        if let Ok(document) = serde_json::from_slice::<TranscriptDocument>(data) {
            let text = document
                .results
                .transcripts
                .into_iter()
                .map(|t| t.transcript)
                .collect::<Vec<_>>()
                .join(" ");
            return Ok(Self::new(text));
        }

        let text = std::str::from_utf8(data)
            .map_err(|e| TranscriptError::InvalidEncoding(e.to_string()))?;
        Ok(Self::new(text))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("transcript is not valid utf-8: {0}")]
    InvalidEncoding(String),
}
