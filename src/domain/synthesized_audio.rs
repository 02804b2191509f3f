use std::fmt;

use serde::Deserialize;

use super::StoragePath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioFormat {
    Mp3,
    OggVorbis,
    Pcm,
}

impl AudioFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::OggVorbis => "ogg_vorbis",
            AudioFormat::Pcm => "pcm",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::OggVorbis => "ogg",
            AudioFormat::Pcm => "pcm",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "audio/mpeg",
            AudioFormat::OggVorbis => "audio/ogg",
            AudioFormat::Pcm => "audio/pcm",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedAudio {
    pub index: usize,
    pub path: StoragePath,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynthesizedAudioSet {
    items: Vec<SynthesizedAudio>,
    chunk_count: usize,
}

impl SynthesizedAudioSet {
    pub fn new(chunk_count: usize) -> Self {
        Self {
            items: Vec::new(),
            chunk_count,
        }
    }

    pub fn push(&mut self, audio: SynthesizedAudio) {
        self.items.push(audio);
    }

    pub fn items(&self) -> &[SynthesizedAudio] {
        &self.items
    }

    pub fn indices(&self) -> Vec<usize> {
        self.items.iter().map(|a| a.index).collect()
    }

    /// Number of synthesis chunks attempted, including skipped ones.
    pub fn chunk_count(&self) -> usize {
        self.chunk_count
    }

    /// Chunk indices with no persisted audio.
    pub fn gaps(&self) -> Vec<usize> {
        let present = self.indices();
        (0..self.chunk_count)
            .filter(|i| !present.contains(i))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
