mod word_wrap_splitter;

pub use word_wrap_splitter::WordWrapSplitter;
