#![no_main]

use cachefusion::policy::{Destination, EvictionMode, Outcome};
use cachefusion::store::BoundedLruStore;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on BoundedLruStore
//
// Tests random sequences of access, store, and clear operations across both
// eviction modes, validating invariants after each step.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // First byte: capacity (1-16) and eviction mode
    let capacity = (data[0] as usize % 16) + 1;
    let mode = if data[0] & 0x80 != 0 {
        EvictionMode::WriteBack
    } else {
        EvictionMode::Discard
    };
    let mut store: BoundedLruStore<u8> = match BoundedLruStore::try_with_eviction(capacity, mode) {
        Ok(store) => store,
        Err(_) => return,
    };

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 5;
        let value = data[idx + 1] % 32;

        match op {
            0 | 1 => {
                let was_resident = store.contains(&value);
                let was_in_backing = store.in_backing(&value);
                let report = store.access(value);
                assert_eq!(report.outcome == Outcome::Hit, was_resident);
                if !was_resident {
                    assert_eq!(report.fetched, was_in_backing);
                }
                assert_eq!(store.recency_rank(&value), Some(store.len() - 1));
            }
            2 => {
                let before = store.snapshot_cache();
                store.store(value, Destination::Backing);
                assert_eq!(store.snapshot_cache(), before);
            }
            3 => {
                store.store(value, Destination::Cache);
                assert!(store.contains(&value));
            }
            4 => {
                if data[idx + 1] == 0xff {
                    store.clear();
                    assert!(store.is_empty());
                }
            }
            _ => unreachable!(),
        }

        store.debug_validate_invariants();
        assert!(store.len() <= store.capacity());
        assert!(store.check_invariants().is_ok());

        idx += 2;
    }
});
