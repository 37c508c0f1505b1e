pub mod gc;

pub use parking_lot;
pub use triomphe;

pub mod prelude {
    pub type HMap<K, V> = rustc_hash::FxHashMap<K, V>;
    pub type HSet<V> = rustc_hash::FxHashSet<V>;
}
