//! Leap-rule memoization.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use crate::leap_rule::{self, LeapRule};

/// Global cache of evaluated leap rules, keyed by Jalali year.
static CACHE: Mutex<Option<LruCache<i32, LeapRule>>> = Mutex::new(None);

const CACHE_SIZE: usize = 256;

/// Get or evaluate the leap rule for a Jalali year, using the cache.
pub fn get_or_evaluate(jy: i32) -> LeapRule {
    // The cache only ever holds fully computed values, so a poisoned lock is still usable
    let mut cache_guard = CACHE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let cache = cache_guard.get_or_insert_with(|| {
        LruCache::new(NonZeroUsize::new(CACHE_SIZE).unwrap_or(NonZeroUsize::MIN))
    });

    if let Some(rule) = cache.get(&jy) {
        return *rule;
    }

    let rule = leap_rule::evaluate(jy);
    cache.put(jy, rule);
    rule
}
