use crate::domain::Chunk;

/// Splits text into ordered chunks under a size bound fixed at construction.
pub trait TextSplitter: Send + Sync {
    fn split(&self, text: &str) -> Vec<Chunk>;

    fn max_len(&self) -> usize;
}
