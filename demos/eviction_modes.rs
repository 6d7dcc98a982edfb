use cachefusion::builder::StoreBuilder;
use cachefusion::policy::EvictionMode;

fn main() {
    for mode in [EvictionMode::Discard, EvictionMode::WriteBack] {
        let mut store = StoreBuilder::new(2).eviction(mode).build::<&str>();
        for v in ["a", "b", "c"] {
            store.access(v);
        }
        println!(
            "{mode:?}: cache={:?} main_memory={:?}",
            store.snapshot_cache(),
            store.snapshot_backing()
        );
    }
}

// Expected output:
// Discard: cache=["b", "c"] main_memory=[]
// WriteBack: cache=["b", "c"] main_memory=["a"]
//
// Explanation: capacity=2; "c" evicts "a". Discard drops it, WriteBack
// flushes it to main memory.
