pub use patronus_macros::patronus;

/// A partial view of `T` where every field may or may not be set.
///
/// Implemented by the structs generated through `#[patronus(...)]`.
pub trait Partial<T> {
    /// `true` when no field is set.
    fn is_empty(&self) -> bool;

    /// Build a new `T` taking every set field from `self` and the rest from `base`.
    fn merge_with(self, base: &T) -> T;
}
