use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Object key of the synthesized audio for one synthesis chunk.
    pub fn synthesized_chunk(prefix: &str, index: usize, extension: &str) -> Self {
        Self(format!("{}translated_chunk_{}.{}", prefix, index, extension))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
