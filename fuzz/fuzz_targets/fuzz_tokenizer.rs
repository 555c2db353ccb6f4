#![no_main]

use libfuzzer_sys::fuzz_target;
use trie_search::utils::{Normalizer, Tokenizer};

fuzz_target!(|data: &str| {
    // Normalization and tokenization must not panic on any input,
    // and must never produce empty tokens
    let normalized = Normalizer::default().normalize(data);
    for token in Tokenizer::default().tokenize(&normalized) {
        assert!(!token.is_empty());
    }
});
