use cachefusion::policy::Outcome;
use cachefusion::store::BoundedLruStore;

fn main() {
    let mut store: BoundedLruStore<&str> = BoundedLruStore::new(5);

    for v in ["a", "b", "c", "d", "e"] {
        store.access(v);
    }

    let hit = store.access("a");
    println!("a: {:?}", hit.outcome);

    let miss = store.access("f");
    assert_eq!(miss.outcome, Outcome::Miss);
    println!("f evicted {:?}", miss.evicted);
    println!("cache: {:?}", store.snapshot_cache());
}

// Expected output:
// a: Hit
// f evicted Some("b")
// cache: ["c", "d", "e", "a", "f"]
//
// Explanation: capacity=5; accessing "a" makes it MRU, so "b" is the LRU
// entry when "f" arrives.
