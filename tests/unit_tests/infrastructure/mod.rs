mod word_wrap_splitter_test;
