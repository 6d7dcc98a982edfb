#![no_main]

use cachefusion::ds::RecencyList;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on RecencyList
//
// Tests random sequences of touch, push, remove, pop and clear operations.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = (data[0] as usize % 32) + 1;
    let mut list: RecencyList<u8> = RecencyList::new(capacity);

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 5;
        let value = data[idx + 1];

        match op {
            0 => {
                if !list.touch(&value) {
                    let len = list.len();
                    let evicted = list.push_evicting(value);
                    assert_eq!(evicted.is_some(), len == capacity);
                }
                assert_eq!(list.peek_mru(), Some(&value));
            }
            1 => {
                let had = list.contains(&value);
                assert_eq!(list.remove(&value).is_some(), had);
                assert!(!list.contains(&value));
            }
            2 => {
                let front = list.peek_lru().copied();
                assert_eq!(list.pop_lru(), front);
            }
            3 => {
                let _ = list.position(&value);
            }
            4 => {
                list.clear();
            }
            _ => unreachable!(),
        }

        list.debug_validate_invariants();
        assert!(list.len() <= list.capacity());

        idx += 2;
    }
});
