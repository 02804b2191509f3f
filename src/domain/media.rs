use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::StoragePath;

/// Location of the source media, as understood by the recognition service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUri {
    bucket: String,
    path: StoragePath,
}

impl MediaUri {
    pub fn new(bucket: impl Into<String>, path: StoragePath) -> Self {
        Self {
            bucket: bucket.into(),
            path,
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn path(&self) -> &StoragePath {
        &self.path
    }
}

impl fmt::Display for MediaUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaFormat {
    Mp3,
    Mp4,
    Wav,
    Flac,
    Ogg,
}

impl MediaFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaFormat::Mp3 => "mp3",
            MediaFormat::Mp4 => "mp4",
            MediaFormat::Wav => "wav",
            MediaFormat::Flac => "flac",
            MediaFormat::Ogg => "ogg",
        }
    }
}

impl FromStr for MediaFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mp3" => Ok(MediaFormat::Mp3),
            "mp4" => Ok(MediaFormat::Mp4),
            "wav" => Ok(MediaFormat::Wav),
            "flac" => Ok(MediaFormat::Flac),
            "ogg" => Ok(MediaFormat::Ogg),
            other => Err(format!("Invalid media format: {}", other)),
        }
    }
}

impl fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
