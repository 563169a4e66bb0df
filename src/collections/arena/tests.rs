#![cfg(test)]
#![allow(clippy::unwrap_used)]

use super::*;
use crate::util::alloc::CountedDrop;

#[test]
fn test_fresh_pool_hands_out_ascending_indices() {
    let mut pool = Pool::with_cap(4);

    let indices = ["a", "b", "c", "d"].map(|v| pool.acquire(v).map(|h| h.index()));
    assert_eq!(
        indices,
        [Ok(0), Ok(1), Ok(2), Ok(3)],
        "A fresh pool should hand out slots in ascending order."
    );
}

#[test]
fn test_reuse_is_lifo() {
    let mut pool = Pool::with_cap(5);
    let handles = ["a", "b", "c", "d", "e"].map(|v| pool.acquire(v).unwrap());

    pool.release(handles[1]);
    pool.release(handles[3]);
    pool.release(handles[0]);

    assert_eq!(pool.acquire("x").unwrap().index(), 0, "Most recently released slot comes first.");
    assert_eq!(pool.acquire("y").unwrap().index(), 3);
    assert_eq!(pool.acquire("z").unwrap().index(), 1);
    assert!(pool.is_exhausted());
}

#[test]
fn test_exhaustion_has_no_side_effects() {
    let mut pool = Pool::with_cap(2);
    let first = pool.acquire(1).unwrap();
    pool.acquire(2).unwrap();

    assert_eq!(pool.acquire(3), Err(PoolExhausted { cap: 2 }));
    assert_eq!(pool.available(), 0);
    assert_eq!(pool.in_use(), 2);

    pool.release(first);
    assert_eq!(
        pool.acquire(4).map(|h| h.index()),
        Ok(0),
        "A failed acquire shouldn't disturb the free stack."
    );
}

#[test]
fn test_counts_stay_balanced() {
    let mut pool = Pool::with_cap(8);
    let mut live = [None; 8];

    for round in 0..40_usize {
        let i = (round * 5) % 8;
        match live[i].take() {
            Some(handle) => assert!(pool.release(handle).is_some()),
            None => live[i] = Some(pool.acquire(round).unwrap()),
        }
        assert_eq!(
            pool.in_use() + pool.available(),
            pool.cap(),
            "Slots in use and free slots should always sum to the capacity."
        );
        assert_eq!(pool.in_use(), live.iter().flatten().count());
    }
}

#[test]
fn test_stale_handles_are_rejected() {
    let mut pool = Pool::with_cap(1);
    let old = pool.acquire("old").unwrap();

    assert_eq!(pool.release(old), Some("old"));
    assert_eq!(pool.release(old), None, "Releasing twice should be ignored.");
    assert_eq!(pool.available(), 1, "The ignored release shouldn't push another free index.");

    let new = pool.acquire("new").unwrap();
    assert_eq!(new.index(), old.index());
    assert_ne!(new, old, "A reused slot should carry a new generation.");
    assert_eq!(pool.get(old), None);
    assert_eq!(pool.get_mut(old), None);
    assert_eq!(pool.get(new), Some(&"new"));
}

#[test]
fn test_release_clears_payload() {
    let counter = CountedDrop::new();
    let mut pool = Pool::with_cap(3);
    let handles = [(); 3].map(|_| pool.acquire(counter.clone()).unwrap());

    drop(pool.release(handles[2]));
    assert_eq!(counter.drops(), 1, "Released payload should be handed back to the caller.");
    assert!(!pool.contains(handles[2]));

    drop(pool);
    assert_eq!(counter.drops(), 3, "Dropping the pool should drop everything still in it.");
}

#[test]
fn test_zero_capacity() {
    let mut pool = Pool::<u8>::with_cap(0);
    assert!(pool.is_exhausted());
    assert_eq!(pool.acquire(0), Err(PoolExhausted { cap: 0 }));
}

#[test]
fn test_last_generation_retires_slot() {
    let mut pool = Pool::with_cap(2);
    pool.slots[0].generation = u32::MAX - 1;

    let handle = pool.acquire("a").unwrap();
    assert_eq!(pool.release(handle), Some("a"));
    let last = pool.acquire("b").unwrap();
    assert_eq!((last.index(), last.generation()), (0, u32::MAX));

    assert_eq!(pool.release(last), Some("b"));
    assert_eq!(pool.retired(), 1);
    assert_eq!(pool.in_use() + pool.available() + pool.retired(), pool.cap());
    assert_eq!(pool.release(last), None, "A retired slot shouldn't accept its last handle again.");

    let next = pool.acquire("c").unwrap();
    assert_eq!(next.index(), 1, "A retired slot should never be handed out again.");
    assert_eq!(pool.acquire("d"), Err(PoolExhausted { cap: 2 }));
    assert_eq!(pool.get(last), None);
}
