use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;
use std::collections::BTreeMap;
use std::hash::{BuildHasher, Hash};
use std::sync::{Arc, Weak};

/// A weakly-held interning pool: maps a value to a shared [`Arc`] holding it,
/// so that at most one live copy of any given value exists at a time. The pool
/// itself only keeps [`Weak`] handles; once every [`Arc`] handed out for a
/// value is dropped, the entry is reclaimable. `N` is the inline capacity of a
/// hash bucket, `GC` the number of buckets above which a full sweep runs.
///
/// The pool is a memory optimization only. Callers must never rely on pointer
/// identity for equality; two equal values may be backed by distinct
/// allocations across an eviction.
pub struct WeakInterner<T: ?Sized, const N: usize = 4, const GC: usize = 0> {
    store: BTreeMap<u64, SmallVec<[Weak<T>; N]>>,
}

impl<T: ?Sized, const N: usize, const GC: usize> Default for WeakInterner<T, N, GC> {
    fn default() -> Self {
        Self {
            store: BTreeMap::default(),
        }
    }
}

impl<T: ?Sized, const N: usize, const GC: usize> WeakInterner<T, N, GC> {
    #[inline]
    fn hash<V: Hash + ?Sized>(v: &V) -> u64 {
        FxBuildHasher.hash_one(v)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Drops every entry whose value is no longer referenced from outside the
    /// pool.
    pub fn gc(&mut self) {
        self.store.retain(|_, bucket| {
            bucket.retain(|weak| weak.strong_count() > 0);
            !bucket.is_empty()
        });
    }

    /// Returns the pooled instance equal to `v`, inserting a fresh one if no
    /// live instance exists. Dead entries in the touched bucket are dropped in
    /// passing.
    pub fn get_or_intern<V>(&mut self, v: V) -> Arc<T>
    where
        for<'a> &'a T: PartialEq<V>,
        V: Hash + Into<Arc<T>>,
    {
        let hash = Self::hash(&v);
        let ret = match self.store.entry(hash) {
            std::collections::btree_map::Entry::Occupied(mut e) => {
                let bucket = e.get_mut();
                let live = bucket
                    .iter()
                    .find_map(|weak| weak.upgrade().filter(|p| &**p == v));
                live.map_or_else(
                    || {
                        bucket.retain(|weak| weak.strong_count() > 0);
                        let p: Arc<T> = v.into();
                        bucket.push(Arc::downgrade(&p));
                        p
                    },
                    |p| p,
                )
            }
            std::collections::btree_map::Entry::Vacant(e) => {
                let p: Arc<T> = v.into();
                e.insert(smallvec::smallvec![Arc::downgrade(&p)]);
                p
            }
        };
        if GC > 0 && self.store.len() > GC {
            self.gc();
        }
        ret
    }

    /// Looks up the live pooled instance equal to `v` without inserting.
    pub fn get<V>(&self, v: &V) -> Option<Arc<T>>
    where
        for<'a> &'a T: PartialEq<V>,
        V: Hash,
    {
        self.store.get(&Self::hash(v)).and_then(|bucket| {
            bucket
                .iter()
                .find_map(|weak| weak.upgrade().filter(|p| &**p == *v))
        })
    }
}
