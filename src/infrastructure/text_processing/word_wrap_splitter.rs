use crate::application::ports::TextSplitter;
use crate::domain::Chunk;

/// Greedy word wrap over whitespace-separated tokens.
///
/// Runs of whitespace collapse to a single space and never start or end a
/// chunk. Length is counted in `char`s. A token longer than `max_len` is
/// emitted alone as an oversized chunk instead of being cut.
pub struct WordWrapSplitter {
    max_len: usize,
}

impl WordWrapSplitter {
    pub fn new(max_len: usize) -> Self {
        Self {
            max_len: max_len.max(1),
        }
    }
}

impl TextSplitter for WordWrapSplitter {
    fn split(&self, text: &str) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_len = 0;

        for word in text.split_whitespace() {
            let word_len = word.chars().count();

            if current_len > 0 && current_len + 1 + word_len > self.max_len {
                chunks.push(Chunk::new(chunks.len(), std::mem::take(&mut current)));
                current_len = 0;
            }

            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(word);
            current_len += word_len;
        }

        if current_len > 0 {
            chunks.push(Chunk::new(chunks.len(), current));
        }

        chunks
    }

    fn max_len(&self) -> usize {
        self.max_len
    }
}
