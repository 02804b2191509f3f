use relingua::application::ports::TextSplitter;
use relingua::domain::join_chunks;
use relingua::infrastructure::text_processing::WordWrapSplitter;

const SAMPLES: &[&str] = &[
    "",
    "single",
    "The quick brown fox jumps over the lazy dog",
    "  leading and   irregular\twhitespace\n\nacross lines  ",
    "a bb ccc dddd eeeee ffffff ggggggg hhhhhhhh",
    "supercalifragilisticexpialidocious is long",
    "नमस्ते दुनिया यह एक परीक्षण है",
];

fn normalized(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[test]
fn given_any_text_when_joining_chunks_then_reproduces_normalized_input() {
    for max_len in [1, 5, 12, 5000] {
        let splitter = WordWrapSplitter::new(max_len);
        for sample in SAMPLES {
            let chunks = splitter.split(sample);

            assert_eq!(join_chunks(&chunks), normalized(sample), "max_len {}", max_len);
        }
    }
}

#[test]
fn given_any_text_when_splitting_then_chunks_respect_bound_unless_single_token() {
    for max_len in [1, 5, 12, 40] {
        let splitter = WordWrapSplitter::new(max_len);
        for sample in SAMPLES {
            for chunk in splitter.split(sample) {
                let single_token = !chunk.text.contains(' ');
                assert!(
                    chunk.char_len() <= max_len || single_token,
                    "chunk {:?} exceeds {}",
                    chunk.text,
                    max_len
                );
            }
        }
    }
}

#[test]
fn given_chunks_when_splitting_then_indices_are_zero_based_and_contiguous() {
    let splitter = WordWrapSplitter::new(10);

    let chunks = splitter.split("The quick brown fox jumps over the lazy dog");

    let indices: Vec<usize> = chunks.iter().map(|c| c.index).collect();
    assert_eq!(indices, (0..chunks.len()).collect::<Vec<_>>());
}

#[test]
fn given_token_longer_than_bound_when_splitting_then_emits_it_alone() {
    let splitter = WordWrapSplitter::new(8);

    let chunks = splitter.split("tiny extraordinarily big");

    let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["tiny", "extraordinarily", "big"]);
}

#[test]
fn given_multibyte_text_when_splitting_then_counts_characters_not_bytes() {
    let splitter = WordWrapSplitter::new(7);

    let chunks = splitter.split("äöü äöü");

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].char_len(), 7);
    assert_eq!(chunks[0].text.len(), 13);
}

#[test]
fn given_blank_text_when_splitting_then_returns_no_chunks() {
    let splitter = WordWrapSplitter::new(100);

    assert!(splitter.split(" \n\t ").is_empty());
}
