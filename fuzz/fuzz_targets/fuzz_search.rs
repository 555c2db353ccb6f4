#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use trie_search::TrieSearch;

#[derive(Arbitrary, Debug)]
struct Input {
    docs: Vec<String>,
    query: String,
    exact: bool,
}

fuzz_target!(|input: Input| {
    let mut engine: TrieSearch<String> = TrieSearch::builder()
        .exclude_partial(input.exact)
        .build()
        .unwrap();
    engine.add_many(input.docs).unwrap();

    // Every hit must be a stored value
    let results = engine.search(&input.query);
    assert!(results.len() <= engine.len());
    for r in &results {
        assert!(engine.contains(r));
    }
});
